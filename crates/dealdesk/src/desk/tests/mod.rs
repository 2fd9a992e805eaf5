mod common;
mod settlements;
