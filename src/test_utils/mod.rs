#![allow(missing_docs)]

pub(crate) mod data;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod server;

pub(crate) use data::{CORRUPT_DOCUMENT, TempDataPath};
pub(crate) use form::{assert_form_input, must_get_form};
pub(crate) use html::{assert_valid_html, count_elements, parse_html_document};
pub(crate) use server::{get_test_server, get_test_state};
