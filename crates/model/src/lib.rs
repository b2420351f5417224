//! Order request types shared by the REST client and the CLI.

mod order;

pub use order::{NewOrder, OrderError, OrderSide, OrderType, TimeInForce};
