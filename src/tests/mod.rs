mod support;
mod prompt_builder_tests;
mod schema_builder_tests;
mod hdl_generator_tests;
mod render_tests;
