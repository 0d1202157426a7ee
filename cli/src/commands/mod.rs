mod health;
mod meal;
mod options;
mod workout;

pub(crate) use health::cmd_health;
pub(crate) use meal::cmd_meal;
pub(crate) use options::cmd_options;
pub(crate) use workout::cmd_workout;
