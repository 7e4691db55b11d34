//! different utility modules used by the calculator binary
/// terminal and file logging
pub mod logger;
/// parse settings document with structure like "title1 key1: value1, value2 key2: value2 title2 key3: value3" into CalculatorSettings
pub mod settings;
