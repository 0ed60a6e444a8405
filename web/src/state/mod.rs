//! App-wide reactive state

pub mod toasts;
