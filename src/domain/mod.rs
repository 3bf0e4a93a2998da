// Domain layer: the range value, its step interval and the clock port.

pub mod interval;
pub mod period;
pub mod ports;
pub mod range;
