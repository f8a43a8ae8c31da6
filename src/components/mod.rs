pub mod learning_path;
