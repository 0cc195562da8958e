#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod mock_api;

pub(crate) use html::{
    assert_valid_html, parse_html_document, parse_html_fragment, select_all_text, select_text,
};
pub(crate) use http::{assert_content_type, assert_status_ok};
pub(crate) use mock_api::{sample_response, spawn_mock_api, transactions_api, unused_address};
