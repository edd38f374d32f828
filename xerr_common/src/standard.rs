//! The standard exchange error taxonomy.
//!
//! Authored as a literal and materialized on first access. The cached
//! hierarchy is process-wide, immutable, and shared without locking.

use std::sync::LazyLock;

use crate::error_tree;
use crate::hierarchy::ErrorHierarchy;
use crate::materialize::materialize;
use crate::tree::ErrorTreeNode;

/// Name of the root kind.
pub const ROOT_KIND: &str = "BaseError";

/// The standard taxonomy as a declarative tree.
pub fn standard_tree() -> ErrorTreeNode {
    error_tree!(BaseError {
        ExchangeError {
            AuthenticationError {
                PermissionDenied { AccountNotEnabled },
                AccountSuspended,
            },
            ArgumentsRequired,
            BadRequest {
                BadSymbol,
                MarginModeAlreadySet,
                NoChange,
                OperationFailed,
            },
            BadResponse {
                NullResponse,
                ApiEngineFailed,
            },
            InsufficientFunds,
            InvalidAddress { AddressPending },
            InvalidOrder {
                OrderNotFound,
                OrderNotCached,
                CancelPending,
                OrderImmediatelyFillable,
                OrderNotFillable,
                DuplicateOrderId,
                ContractUnavailable,
            },
            NotSupported,
        },
        NetworkError {
            DDoSProtection { RateLimitExceeded },
            ExchangeNotAvailable { OnMaintenance },
            InvalidNonce,
            RequestTimeout,
        },
    })
}

static STANDARD: LazyLock<ErrorHierarchy> = LazyLock::new(|| {
    materialize(&standard_tree())
        .unwrap_or_else(|e| panic!("standard exchange error taxonomy is invalid: {e}"))
});

/// The materialized standard taxonomy.
///
/// The first call materializes it; concurrent first callers block until the
/// single initialization finishes and then all observe the same instance.
pub fn standard() -> &'static ErrorHierarchy {
    &STANDARD
}
