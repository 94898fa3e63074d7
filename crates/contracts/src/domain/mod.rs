pub mod a001_generated_result;
