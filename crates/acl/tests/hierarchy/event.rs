use super::*;

fn names(anthologies: &[Anthology]) -> Vec<&str> { anthologies.iter().map(Anthology::name).collect() }

#[test]
fn test_url_is_derived_from_identity() {
  let event = Event::new("ACL", 2023);
  assert_eq!(event.url(), EVENT_ACL_2023);
  assert_eq!(event.venue(), "ACL");
  assert_eq!(event.year(), 2023);
}

#[traced_test]
#[tokio::test]
async fn test_get_anthologies() -> TestResult<()> {
  let (client, _fetcher) = mock_client(mock_site());
  let event = Event::with_client(client, "ACL", 2023);

  let anthologies = event.get_anthologies().await?;
  assert_eq!(names(&anthologies), vec!["NLP for Health", "Vision Track", "Applied NLP"]);

  let ids: Vec<_> = anthologies.iter().map(Anthology::id).collect();
  assert_eq!(ids, vec!["2023nlp4health", "2023vision", "2023applied"]);

  let counts: Vec<_> = anthologies.iter().map(Anthology::paper_count).collect();
  assert_eq!(counts, vec![3, 1, 2]);

  assert!(anthologies.iter().all(|anthology| anthology.event() == "ACL-2023"));
  assert_eq!(anthologies[1].url(), "https://aclanthology.org/events/acl-2023/#2023vision");
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_search_anthology_keeps_order() -> TestResult<()> {
  let (client, _fetcher) = mock_client(mock_site());
  let event = Event::with_client(client, "ACL", 2023);

  let found = event.search_anthology("NLP").await?;
  assert_eq!(names(&found), vec!["NLP for Health", "Applied NLP"]);
  assert_eq!(found[1].paper_count(), 2);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_search_anthology_is_case_sensitive() -> TestResult<()> {
  let (client, _fetcher) = mock_client(mock_site());
  let event = Event::with_client(client, "ACL", 2023);

  assert!(event.search_anthology("nlp").await?.is_empty());
  assert!(event.search_anthology("Robotics").await?.is_empty());
  assert_eq!(event.search_anthology("").await?.len(), 3);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_event_page_is_fetched_once() -> TestResult<()> {
  let (client, fetcher) = mock_client(mock_site());
  let event = Event::with_client(client, "ACL", 2023);

  let first = event.get_anthologies().await?;
  let second = event.get_anthologies().await?;
  event.search_anthology("Vision").await?;

  assert_eq!(first, second);
  assert_eq!(fetcher.request_count(EVENT_ACL_2023), 1);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_bad_paper_count() {
  let page = r##"<section><ul><li><a href="#x">Broken</a> <span>lots of papers</span></li></ul></section>"##;
  let (client, _fetcher) = mock_client(MockFetcher::new().with_page(EVENT_ACL_2023, page));
  let event = Event::with_client(client, "ACL", 2023);
  assert!(matches!(event.get_anthologies().await, Err(AclError::InvalidNumber { .. })));
}

#[traced_test]
#[tokio::test]
async fn test_unknown_event() {
  let (client, _fetcher) = mock_client(mock_site());
  let event = Event::with_client(client, "ACL", 1850);
  assert!(event.get_anthologies().await.is_err());
  assert!(matches!(event.page_state().await, PageState::FetchFailed(_)));
}
