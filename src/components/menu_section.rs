//! Menu Section Component

use leptos::prelude::*;

use crate::catalog::Category;
use crate::components::ProductCard;

/// One catalog category: anchor, heading, product grid
#[component]
pub fn MenuSection(category: Category) -> impl IntoView {
    view! {
        <section id=category.id class="menu-section">
            <h2>{category.title}</h2>
            <div class="product-grid">
                {category.products.iter().map(|product| {
                    view! { <ProductCard product=*product /> }
                }).collect_view()}
            </div>
        </section>
    }
}
