use super::*;

fn years(events: &[Event]) -> Vec<u32> { events.iter().map(Event::year).collect() }

#[test]
fn test_url_is_derived_from_name() {
  assert_eq!(Venue::new("ACL").url(), "https://aclanthology.org/venues/acl");
  assert_eq!(Venue::new("CoNLL").url(), "https://aclanthology.org/venues/conll");
}

#[traced_test]
#[tokio::test]
async fn test_get_all_events_unbounded() -> TestResult<()> {
  let (client, _fetcher) = mock_client(mock_site());
  let venue = Venue::with_client(client, "ACL");

  let events = venue.get_all_events(None, None).await?;
  assert_eq!(years(&events), vec![2018, 2019, 2020, 2021, 2022]);
  assert!(events.iter().all(|event| event.venue() == "ACL"));
  assert_eq!(events[0].url(), "https://aclanthology.org/events/acl-2018");
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_get_all_events_inclusive_range() -> TestResult<()> {
  let (client, _fetcher) = mock_client(mock_site());
  let venue = Venue::with_client(client, "ACL");

  let events = venue.get_all_events(Some(2019), Some(2021)).await?;
  assert_eq!(years(&events), vec![2019, 2020, 2021]);
  assert!(venue.get_all_events(Some(2030), Some(2040)).await?.is_empty());
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_get_all_events_single_bound_is_ignored() -> TestResult<()> {
  let (client, _fetcher) = mock_client(mock_site());
  let venue = Venue::with_client(client, "ACL");

  assert_eq!(years(&venue.get_all_events(Some(2021), None).await?).len(), 5);
  assert_eq!(years(&venue.get_all_events(None, Some(2019)).await?).len(), 5);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_get_events_in_open_range() -> TestResult<()> {
  let (client, _fetcher) = mock_client(mock_site());
  let venue = Venue::with_client(client, "ACL");

  assert_eq!(years(&venue.get_events_in(2021..).await?), vec![2021, 2022]);
  assert_eq!(years(&venue.get_events_in(..2020).await?), vec![2018, 2019]);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_get_event() -> TestResult<()> {
  let (client, fetcher) = mock_client(mock_site());
  let venue = Venue::with_client(client, "ACL");

  let event = venue.get_event(2020).await?.expect("2020 is listed");
  assert_eq!(event.year(), 2020);
  assert_eq!(event.url(), "https://aclanthology.org/events/acl-2020");
  assert!(venue.get_event(1999).await?.is_none());

  // every listing call above shares the one fetch
  venue.get_all_events(None, None).await?;
  assert_eq!(fetcher.request_count(VENUE_ACL), 1);
  assert_eq!(venue.page_state().await, PageState::Fetched);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_repeated_calls_are_equal() -> TestResult<()> {
  let (client, fetcher) = mock_client(mock_site());
  let venue = Venue::with_client(client, "ACL");

  let first = venue.get_all_events(Some(2019), Some(2021)).await?;
  let second = venue.get_all_events(Some(2019), Some(2021)).await?;
  assert_eq!(first, second);
  assert_eq!(fetcher.requests(), vec![VENUE_ACL.to_owned()]);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_get_event_stops_at_first_match() -> TestResult<()> {
  let page = r#"<html><body><section>
    <div class="row"><h4><a href="/events/acl-2020/">2020</a></h4></div>
    <div class="row"><h4><a href="/events/acl-older/">Older</a></h4></div>
  </section></body></html>"#;
  let (client, _fetcher) = mock_client(MockFetcher::new().with_page(VENUE_ACL, page));
  let venue = Venue::with_client(client, "ACL");

  let event = venue.get_event(2020).await?.expect("2020 is listed before the malformed entry");
  assert_eq!(event.year(), 2020);
  assert!(matches!(venue.get_event(2019).await, Err(AclError::InvalidNumber { .. })));
  Ok(())
}
