pub mod module_visitor;
