pub mod intake;

pub use intake::{Intake, IntakeConfig, IntakeMessage};
