use super::mock::{mock_store, product, MockBackend};
use super::*;
use contracts::domain::a001_product::{validate_product_data, ProductDraft, Variant};
use contracts::domain::a002_quotation::UserDetails;
use contracts::shared::file_info::KIB;
use futures::executor::{block_on, LocalPool};
use futures::task::LocalSpawnExt;

fn payload(name: &str) -> ProductPayload {
    ProductPayload {
        name: name.to_string(),
        material_of_construction: "PET".into(),
        cap_type: "Flip top".into(),
        description: String::new(),
        image_url: None,
        variants: vec![],
    }
}

fn jpeg() -> SelectedFile {
    SelectedFile::from_bytes("bottle.jpg", "image/jpeg", vec![0; 4 * KIB as usize])
}

fn ids(store: &AppStore) -> Vec<String> {
    store
        .products
        .get_untracked()
        .into_iter()
        .map(|p| p.id.0)
        .collect()
}

fn setup() -> (Rc<MockBackend>, AppStore) {
    mock_store()
}

#[test]
fn test_add_product_prepends() {
    let (backend, store) = setup();
    store.products.set(vec![product("1", "One"), product("2", "Two")]);

    let created = block_on(store.add_product(payload("Navkar Pure"), Some(jpeg()))).unwrap();

    assert_eq!(created.id.0, "new");
    assert_eq!(ids(&store), vec!["new", "1", "2"]);
    assert_eq!(backend.calls(), vec!["create_product:multipart"]);
    assert!(!store.loading.get_untracked());
    assert_eq!(store.error.get_untracked(), None);
}

#[test]
fn test_add_product_without_image_never_calls_backend() {
    let (backend, store) = setup();

    let err = block_on(store.add_product(payload("Navkar Pure"), None)).unwrap_err();

    match err {
        StoreError::Validation(v) => {
            assert_eq!(v.kind, ValidationErrorKind::MissingImage);
            assert_eq!(v.field, ProductField::Image);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(backend.calls().is_empty());
    assert_eq!(
        store.error.get_untracked().as_deref(),
        Some("Product image is required")
    );
    assert!(!store.loading.get_untracked());
}

#[test]
fn test_add_product_with_image_url_sends_json() {
    let (backend, store) = setup();
    let mut p = payload("Navkar Pure");
    p.image_url = Some("https://cdn.example.com/pure.png".into());

    block_on(store.add_product(p, None)).unwrap();

    assert_eq!(backend.calls(), vec!["create_product:json"]);
}

#[test]
fn test_validated_product_keeps_trimmed_variants() {
    let (backend, store) = setup();
    let draft = ProductDraft {
        name: Some("  Navkar Mineral  ".into()),
        material_of_construction: Some("PET".into()),
        cap_type: Some("Screw cap".into()),
        description: None,
        image_url: None,
        variants: Some(vec![Variant {
            size_label: " 500ml ".into(),
            brimful_capacity: "520 ml ".into(),
            neck_size: " 28 mm".into(),
            total_height: "210 mm".into(),
            diameter: "62 mm".into(),
            label_height: "60 mm".into(),
            standard_weight: "14 g".into(),
        }]),
    };
    let image = jpeg();
    let validated = validate_product_data(&draft, Some(image.info())).unwrap();

    block_on(store.add_product(validated, Some(image))).unwrap();

    let sent = backend.last_payload.borrow().clone().unwrap();
    assert_eq!(sent.name, "Navkar Mineral");
    assert_eq!(sent.variants[0].size_label, "500ml");
    assert_eq!(sent.variants[0].brimful_capacity, "520 ml");
    assert_eq!(sent.variants[0].neck_size, "28 mm");
    assert_eq!(store.products.get_untracked()[0].variants, sent.variants);
}

#[test]
fn test_update_replaces_in_place() {
    let (_backend, store) = setup();
    store.products.set(vec![product("1", "One"), product("2", "Two"), product("3", "Three")]);

    block_on(store.update_product(ProductId::new("2"), payload("Two v2"), None)).unwrap();

    let products = store.products.get_untracked();
    assert_eq!(ids(&store), vec!["1", "2", "3"]);
    assert_eq!(products[1].name, "Two v2");
    assert_eq!(products[0].name, "One");
}

#[test]
fn test_delete_removes_record() {
    let (backend, store) = setup();
    store.products.set(vec![product("1", "One"), product("2", "Two")]);

    block_on(store.delete_product(ProductId::new("1"))).unwrap();

    assert_eq!(ids(&store), vec!["2"]);
    assert_eq!(backend.calls(), vec!["delete_product"]);
}

#[test]
fn test_bulk_upload_refetches_exactly_once() {
    let (backend, store) = setup();
    *backend.listing.borrow_mut() = vec![product("1", "One")];
    let file = SelectedFile::from_bytes("products.csv", "text/csv", vec![b','; 2 * 1024 * 1024]);

    let result = block_on(store.bulk_upload(file)).unwrap();

    assert_eq!(result.summary.inserted, 1);
    assert_eq!(backend.calls(), vec!["bulk_upload", "list_products"]);
    assert_eq!(ids(&store), vec!["1", "b1"]);
}

#[test]
fn test_fetch_failure_is_recorded_not_returned() {
    let (backend, store) = setup();
    store.products.set(vec![product("1", "One")]);
    *backend.fail.borrow_mut() = Some(ApiError::Http {
        status: 500,
        message: "Database unavailable".into(),
    });

    block_on(store.fetch_products());

    assert_eq!(store.error.get_untracked().as_deref(), Some("Database unavailable"));
    assert_eq!(ids(&store), vec!["1"]);
    assert!(!store.loading.get_untracked());
}

#[test]
fn test_mutation_failure_is_returned_and_cleared_on_next_call() {
    let (backend, store) = setup();
    store.products.set(vec![product("1", "One")]);
    *backend.fail.borrow_mut() = Some(ApiError::network("connection refused"));

    let err = block_on(store.delete_product(ProductId::new("1"))).unwrap_err();
    assert!(matches!(err, StoreError::Api(ref e) if e.is_network()));
    assert_eq!(
        store.error.get_untracked().as_deref(),
        Some("Unable to connect to the server. Please check if the backend is running.")
    );
    assert_eq!(ids(&store), vec!["1"]);

    *backend.fail.borrow_mut() = None;
    block_on(store.delete_product(ProductId::new("1"))).unwrap();
    assert_eq!(store.error.get_untracked(), None);
    assert!(ids(&store).is_empty());
}

#[test]
fn test_quotation_mutations_refetch_listing() {
    let (backend, store) = setup();
    let request = CreateQuotationRequest {
        user_details: UserDetails {
            name: "Amit Patel".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    block_on(store.create_quotation(request)).unwrap();
    block_on(store.resend_quotation_whatsapp(
        QuotationId::new("q-new"),
        ResendWhatsAppOptions::default(),
    ))
    .unwrap();

    assert_eq!(
        backend.calls(),
        vec!["create_quotation", "list_quotations", "resend_whatsapp", "list_quotations"]
    );
    assert_eq!(backend.last_query.borrow().as_ref().and_then(|q| q.limit), Some(100));
    assert_eq!(store.quotations.get_untracked().len(), 1);
}

#[test]
fn test_login_loads_both_collections() {
    let (backend, store) = setup();
    *backend.listing.borrow_mut() = vec![product("1", "One")];

    block_on(store.login());
    assert!(store.is_authenticated.get_untracked());
    assert_eq!(backend.calls(), vec!["list_products", "list_quotations"]);
    assert_eq!(ids(&store), vec!["1"]);

    store.logout();
    assert!(!store.is_authenticated.get_untracked());
}

#[test]
fn test_read_through_calls_leave_state_alone() {
    let (_backend, store) = setup();
    let pdf = block_on(store.quotation_pdf(&QuotationId::new("q1"))).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
    assert_eq!(
        store.quotation_pdf_url(&QuotationId::new("q1")),
        "mock://quotations/q1/pdf"
    );
    let missing = block_on(store.get_product(&ProductId::new("nope"))).unwrap_err();
    assert_eq!(missing.to_string(), "Product not found");
    assert!(store.products.get_untracked().is_empty());
}

/// Runs a fetch and a delete of product 5 concurrently, releasing them in the
/// given order, and returns the final product ids.
fn race(fetch_first: bool) -> Vec<String> {
    let (backend, store) = setup();
    let initial: Vec<Product> = (1..=5).map(|i| product(&i.to_string(), "P")).collect();
    store.products.set(initial.clone());
    let mut listing = initial;
    listing.push(product("6", "P"));
    *backend.listing.borrow_mut() = listing;

    let release_fetch = backend.gate("list_products");
    let release_delete = backend.gate("delete_product");

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    spawner
        .spawn_local(async move { store.fetch_products().await })
        .unwrap();
    spawner
        .spawn_local(async move {
            let _ = store.delete_product(ProductId::new("5")).await;
        })
        .unwrap();
    pool.run_until_stalled();
    assert_eq!(backend.calls(), vec!["list_products", "delete_product"]);

    if fetch_first {
        release_fetch.send(()).unwrap();
        pool.run_until_stalled();
        release_delete.send(()).unwrap();
    } else {
        release_delete.send(()).unwrap();
        pool.run_until_stalled();
        release_fetch.send(()).unwrap();
    }
    pool.run_until_stalled();

    ids(&store)
}

#[test]
fn test_last_completed_call_wins() {
    // Delete finishes last: its write-back is based on the list it started from
    let fetch_then_delete = race(true);
    assert_eq!(fetch_then_delete, vec!["1", "2", "3", "4"]);

    // Fetch finishes last: the server listing overwrites the delete
    let delete_then_fetch = race(false);
    assert_eq!(delete_then_fetch, vec!["1", "2", "3", "4", "5", "6"]);

    assert_ne!(fetch_then_delete, delete_then_fetch);
}
