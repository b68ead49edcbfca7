pub mod functions;
pub mod hargreaves;
