/// Line sink trait and built-in sinks.
pub mod sink;
