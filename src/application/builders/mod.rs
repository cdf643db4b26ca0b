pub mod search_path_builder;
