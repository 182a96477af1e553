//! Command failure taxonomy.
//!
//! Every failure is a recoverable value with a human-readable message; none
//! poison the engine. Precondition failures leave state untouched, so the
//! caller is free to re-issue the command later.

use starlanes_logic::catalog::Product;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// The entity handle does not refer to a live body.
    #[error("no such body")]
    UnknownBody,

    /// A build or send command asked for more of a product than is stocked.
    #[error("not enough {product} on {body}")]
    InsufficientProduct {
        body: String,
        product: Product,
        needed: f32,
        available: f32,
    },

    /// Not enough credits for a purchase.
    #[error("not enough credits")]
    InsufficientCredits { needed: u64, available: u64 },

    /// The body already hosts a factory for this output.
    #[error("{body} already has a factory for {product}")]
    DuplicateFactory { body: String, product: Product },

    /// A route to this destination is already laid.
    #[error("path already exists to {to}")]
    DuplicateRoute { to: String },

    /// A station is already under construction here.
    #[error("already building a station at {body}")]
    StationInProgress { body: String },

    /// The hangar is empty.
    #[error("no ships on {body}")]
    NoShips { body: String },

    /// Neither a direct flight nor a relay can reach the destination.
    #[error("no route to {to} from {from}")]
    NoRoute { from: String, to: String },

    /// The origin has never stocked this product.
    #[error("product {product} not found on {body}")]
    ProductMissing { body: String, product: Product },

    /// No active mission carries this key.
    #[error("mission {key} not found")]
    UnknownMission { key: String },

    /// The target body does not yet hold the required quantities.
    #[error("mission {key} cannot be completed yet")]
    MissionIncomplete { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = CommandError::NoRoute {
            from: "Sun".into(),
            to: "AlphaCentauri7".into(),
        };
        assert_eq!(err.to_string(), "no route to AlphaCentauri7 from Sun");

        let err = CommandError::InsufficientProduct {
            body: "Earth".into(),
            product: Product::Iron,
            needed: 300.0,
            available: 10.0,
        };
        assert_eq!(err.to_string(), "not enough Iron on Earth");
    }
}
