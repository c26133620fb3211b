use super::*;

#[traced_test]
#[tokio::test]
async fn test_get_venues_in_table_order() -> TestResult<()> {
  let (client, _fetcher) = mock_client(mock_site());
  let catalog = Catalog::with_client(client);

  let venues = catalog.get_venues().await?;
  let names: Vec<_> = venues.iter().map(Venue::name).collect();
  assert_eq!(names, vec!["AACL", "ACL", "EMNLP", "NAACL"]);
  assert_eq!(venues[1].url(), VENUE_ACL);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_root_page_is_fetched_once() -> TestResult<()> {
  let (client, fetcher) = mock_client(mock_site());
  let catalog = Catalog::with_client(client);
  assert_eq!(catalog.page_state().await, PageState::Unfetched);

  let first = catalog.get_venues().await?;
  let second = catalog.get_venues().await?;
  let venue = catalog.get_venue("EMNLP").await?;

  assert_eq!(first, second);
  assert_eq!(venue.map(|v| v.name().to_owned()), Some("EMNLP".to_owned()));
  assert_eq!(catalog.page_state().await, PageState::Fetched);
  assert_eq!(fetcher.request_count(ROOT), 1);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_new_catalog_fetches_again() -> TestResult<()> {
  let (client, fetcher) = mock_client(mock_site());
  Catalog::with_client(client.clone()).get_venues().await?;
  Catalog::with_client(client).get_venues().await?;
  assert_eq!(fetcher.request_count(ROOT), 2);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_get_venue_is_exact() -> TestResult<()> {
  let (client, _fetcher) = mock_client(mock_site());
  let catalog = Catalog::with_client(client);

  let acl = catalog.get_venue("ACL").await?.expect("ACL is listed");
  assert_eq!(acl.url(), VENUE_ACL);
  assert!(catalog.get_venue("acl").await?.is_none());
  assert!(catalog.get_venue("AC").await?.is_none());
  assert!(catalog.get_venue(" ACL").await?.is_none());
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_get_venue_not_listed() -> TestResult<()> {
  let root = r#"<table><tbody><tr><th><a href="/venues/emnlp/">EMNLP</a></th></tr></tbody></table>"#;
  let (client, _fetcher) = mock_client(MockFetcher::new().with_page(ROOT, root));
  let catalog = Catalog::with_client(client);
  assert!(catalog.get_venue("ACL").await?.is_none());
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_page_without_venue_table() {
  let (client, _fetcher) =
    mock_client(MockFetcher::new().with_page(ROOT, "<html><body>Down for maintenance</body></html>"));
  let catalog = Catalog::with_client(client);
  match catalog.get_venues().await {
    Err(AclError::MissingElement { selector, context }) => {
      assert_eq!(selector, "table > tbody");
      assert_eq!(context, ROOT);
    },
    other => panic!("unexpected result: {other:?}"),
  }
}

#[traced_test]
#[tokio::test]
async fn test_unreachable_root() {
  let (client, fetcher) = mock_client(MockFetcher::new());
  let catalog = Catalog::with_client(client);

  assert!(matches!(catalog.get_venues().await, Err(AclError::Path(_))));
  assert!(matches!(catalog.page_state().await, PageState::FetchFailed(_)));

  // a failed fetch is not cached
  assert!(catalog.get_venue("ACL").await.is_err());
  assert_eq!(fetcher.request_count(ROOT), 2);
}
