use super::*;

#[test]
fn download_link_is_opened() {
    let target = download_target(Ok(Some("https://files.test/r1.pdf".to_owned())));
    assert_eq!(target, Ok("https://files.test/r1.pdf".to_owned()));
}

#[test]
fn missing_link_becomes_error_notice() {
    assert_eq!(download_target(Ok(None)), Err(Notice::Error(DOWNLOAD_UNAVAILABLE.to_owned())));
}

#[test]
fn failed_request_surfaces_user_message() {
    let err = ApiError::Http { status: 404 };
    assert_eq!(download_target(Err(err.clone())), Err(Notice::Error(err.user_message())));
}
