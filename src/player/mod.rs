pub mod rates;
pub mod state;
pub mod toast;
pub mod transport;
