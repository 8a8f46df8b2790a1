use super::*;

#[test]
fn new_rejects_invalid_directory_url() {
    let result = TheatreDirectoryClient::new("not-a-url", "https://www.cineplex.com", 5, "ua");
    let err = result.unwrap_err();
    assert!(
        matches!(err, DirectoryError::InvalidUrl { ref url, .. } if url == "not-a-url"),
        "expected InvalidUrl, got: {err:?}"
    );
}

#[test]
fn new_keeps_query_string_of_directory_url() {
    let client = TheatreDirectoryClient::new(
        "https://www.cineplex.com/api/v1/theatres?language=en-us",
        "https://www.cineplex.com",
        5,
        "ua",
    )
    .unwrap();
    assert_eq!(
        client.directory_url(),
        "https://www.cineplex.com/api/v1/theatres?language=en-us"
    );
}

#[test]
fn new_strips_trailing_slash_from_vendor() {
    let client = TheatreDirectoryClient::new(
        "https://www.cineplex.com/api/v1/theatres",
        "https://www.cineplex.com/",
        5,
        "ua",
    )
    .unwrap();
    assert_eq!(client.vendor_base_url(), "https://www.cineplex.com");
}
