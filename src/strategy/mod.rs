//! Injected geometric strategies: per-edge distance, join shape, end cap shape, and robust point
//! comparison. The kernel depends only on the traits; one concrete implementation set is provided
//! per role. Strategies are stateless/read-only and may be shared across independent buffering
//! calls.
mod distance;
mod end_cap;
mod join;
mod robust;

pub use distance::{AsymmetricDistance, ConstantDistance, DistanceStrategy};
pub use end_cap::{EndCapStrategy, FlatCap, RoundCap};
pub use join::{JoinStrategy, MiterJoin, RoundJoin};
pub use robust::{FuzzyEqPolicy, GridSnapPolicy, RobustPolicy};
