// Request gatekeeper: ordered validation and guard stages run before a route handler.
//
// Field rules accumulate issues without halting, the collector converts them into a
// single 400, and guards halt with 404 or an informational 200 based on what the
// data services report.

pub mod chains;
pub mod collector;
pub mod context;
pub mod guards;
pub mod issue;
pub mod pipeline;
pub mod rules;
pub mod stage;

pub use collector::CollectIssues;
pub use context::GateContext;
pub use guards::{Collection, NotEmpty, ToDoExists, ToDoOwnedByUser, UserExists, UserNotDisabled};
pub use issue::{Location, Rule, ValidationIssue};
pub use pipeline::{Gatekeeper, Pipeline};
pub use rules::{Check, FieldRule, FieldRules, IntegerParam};
pub use stage::{Halt, Stage, StageKind};
