use flashpdf_server::error::ApiError;

#[tokio::test]
async fn crashed_build_task_is_a_processing_error() {
    let join_error = tokio::task::spawn_blocking(|| -> Vec<u8> { panic!("renderer blew up") })
        .await
        .unwrap_err();

    match ApiError::from(join_error) {
        ApiError::Processing(message) => assert_eq!(message, "PDF rendering failed"),
        other => panic!("expected a processing error, got {other:?}"),
    }
}
