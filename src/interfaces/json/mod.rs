pub mod result_writer;
pub mod run_input_reader;
