//! Catalog Routes
//!
//! Read-only site content.
//!
//! - GET /api/v1/catalog/services - All services
//! - GET /api/v1/catalog/services/:id - One service
//! - GET /api/v1/catalog/qualifications - Degrees and training
//! - GET /api/v1/catalog/blog - Blog posts
//! - GET /api/v1/catalog/blog/:id - One blog post
//! - GET /api/v1/catalog/testimonials - Patient reviews
//! - GET /api/v1/catalog/clinic - Contact details and navigation

use axum::{extract::Path, Json};

use crate::api::dto::{ClinicResponse, TestimonialsResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::catalog::{self, BlogPost, Qualification, Service};

pub async fn list_services() -> Json<&'static [Service]> {
    Json(catalog::services())
}

pub async fn get_service(Path(id): Path<String>) -> ApiResult<Json<&'static Service>> {
    catalog::service(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Service '{}' not found", id)))
}

pub async fn list_qualifications() -> Json<&'static [Qualification]> {
    Json(catalog::qualifications())
}

pub async fn list_blog_posts() -> Json<&'static [BlogPost]> {
    Json(catalog::blog_posts())
}

pub async fn get_blog_post(Path(id): Path<String>) -> ApiResult<Json<&'static BlogPost>> {
    catalog::blog_post(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Blog post '{}' not found", id)))
}

pub async fn list_testimonials() -> Json<TestimonialsResponse> {
    let testimonials = catalog::testimonials();
    Json(TestimonialsResponse {
        testimonials,
        average_rating: catalog::average_rating(),
        total: testimonials.len(),
    })
}

pub async fn clinic_info() -> Json<ClinicResponse> {
    Json(ClinicResponse {
        clinic: catalog::clinic_info(),
        nav: catalog::nav_items(),
    })
}
