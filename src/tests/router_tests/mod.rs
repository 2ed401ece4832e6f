mod conversation_tests;
mod dashboard_tests;
mod flow_tests;
mod page_tests;
mod search_tests;
