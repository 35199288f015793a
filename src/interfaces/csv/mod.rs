pub mod priority_reader;
