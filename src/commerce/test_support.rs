//! Canned commerce API bodies and session cookies for tests.
//!
//! ```
//! use storefront::commerce::test_support::option_page;
//!
//! let body = option_page(1, 2, &["Canon"]);
//! assert_eq!(body["metadata"]["nextPage"], 2);
//! ```

use serde_json::{Value, json};

use super::models::{ApiResponse, CategoryOrBrand, Metadata};

/// Secret [`SESSION_COOKIE`] was encrypted with.
pub const SESSION_SECRET: &str = "storefront-session-secret";

/// Encrypted NextAuth session cookie value for [`SESSION_SECRET`].
///
/// Carries the access token `backend-token` for `mona@example.com` and
/// expires in 2100.
pub const SESSION_COOKIE: &str = concat!(
    "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIn0..AAECAwQFBgcICQoL.",
    "iX2GMsH8F0-4lwq7HfrNcv4SjnyI8qGKok8My6rApQWRQ4rmAE1TElhAfeppibN7CZfEDY-kJq8AFGoQDntDT3an",
    "UDYY7BdVZFvtt5pBQ3tvZpBphzWtcJy_j9laqTiEJvewqAvu2vxYYWTgBcPvjbGKPF5zyYKwPUdQLC78r_sUhbCg",
    "_7EPxR1vm4NjsE6ieIH1FJea_ndTdsaL00e804_mFwfBuHK1.CNmSlZnWx2eHw4ccKIFrzw",
);

/// Records per page reported by [`option_page`].
pub const PAGE_LIMIT: u32 = 40;

/// Builds a category/brand option whose id and slug derive from `name`.
#[must_use]
pub fn option(name: &str) -> CategoryOrBrand {
    let slug = name.to_lowercase().replace(' ', "-");
    CategoryOrBrand {
        id: format!("id-{slug}"),
        name: name.to_owned(),
        slug,
        image: None,
    }
}

/// Builds a typed list page holding `names`.
#[must_use]
pub fn typed_option_page(
    current_page: u32,
    number_of_pages: u32,
    names: &[&str],
) -> ApiResponse<CategoryOrBrand> {
    let data: Vec<CategoryOrBrand> = names.iter().copied().map(option).collect();
    ApiResponse {
        results: u32::try_from(data.len()).unwrap_or(u32::MAX),
        metadata: Metadata {
            current_page,
            number_of_pages,
            limit: PAGE_LIMIT,
            next_page: (current_page < number_of_pages).then_some(current_page.saturating_add(1)),
        },
        data,
    }
}

/// Builds the JSON body of a list page holding `names`.
#[must_use]
pub fn option_page(current_page: u32, number_of_pages: u32, names: &[&str]) -> Value {
    let page = typed_option_page(current_page, number_of_pages, names);
    let mut metadata = json!({
        "currentPage": page.metadata.current_page,
        "numberOfPages": page.metadata.number_of_pages,
        "limit": page.metadata.limit,
    });
    if let (Some(next), Some(fields)) = (page.metadata.next_page, metadata.as_object_mut()) {
        fields.insert("nextPage".to_owned(), json!(next));
    }
    json!({
        "results": page.results,
        "metadata": metadata,
        "data": page.data,
    })
}

/// JSON body of a one-line cart.
#[must_use]
pub fn sample_cart() -> Value {
    json!({
        "status": "success",
        "numOfCartItems": 1,
        "cartId": "cart-1",
        "data": {
            "_id": "cart-1",
            "cartOwner": "user-1",
            "products": [{
                "_id": "line-1",
                "count": 2,
                "price": 150,
                "product": { "_id": "p1", "title": "Camera", "imageCover": "cam.png" }
            }],
            "totalCartPrice": 300
        }
    })
}
