use super::*;

#[test]
fn current_path_without_query() {
    assert_eq!(current_path("/p", ""), "/p");
}

#[test]
fn current_path_keeps_leading_question_mark() {
    assert_eq!(current_path("/p", "?page=2"), "/p?page=2");
}

#[test]
fn current_path_adds_missing_question_mark() {
    assert_eq!(current_path("/", "q=rust"), "/?q=rust");
}
