// Application layer: wires configured sources, the board and exporters together.

pub mod engine;
