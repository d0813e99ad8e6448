//! Unit test modules.

mod facemask_test;
mod field_test;
mod keyword_choice_test;
mod observer_test;
mod visibility_test;
