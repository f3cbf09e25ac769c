pub mod gate;
pub mod response;

pub use gate::{gate_middleware, ResolvedToDo, ResolvedUser, RouteGate};
pub use response::{ApiResponse, ApiResult};
