pub mod console;
pub mod csv;
pub mod percent;
pub mod table;
