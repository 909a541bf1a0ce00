pub mod eval_json;
