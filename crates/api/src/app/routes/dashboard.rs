//! Form-based dashboard: the interactive front-end over the same
//! Validate → Assemble → Classify → Decide chain as `/predict`.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Form},
    response::Html,
    routing::get,
};
use serde::Deserialize;

use codrisk_core::{CATEGORIES, OrderFeatures};
use codrisk_inference::{Prediction, RISK_THRESHOLD, insights};

use crate::app::services::{self, AppServices, ArtifactState};

pub fn router() -> Router {
    Router::new().route("/", get(show_form).post(submit))
}

/// Dashboard form fields. The widgets mirror the validator bounds, but the
/// submitted values still go through the one shared validator.
#[derive(Debug, Deserialize)]
pub struct DashboardForm {
    pub price: i64,
    pub qty_ordered: i64,
    pub category_name_1: String,
    pub month: i64,
    pub date: i64,
}

pub async fn show_form(Extension(services): Extension<Arc<AppServices>>) -> Html<String> {
    match &services.artifact {
        ArtifactState::Ready(_) => page(&form_html(), ""),
        ArtifactState::Unavailable(reason) => degraded_page(reason),
    }
}

pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<DashboardForm>,
) -> Html<String> {
    let classifier = match &services.artifact {
        ArtifactState::Ready(c) => c.clone(),
        ArtifactState::Unavailable(reason) => return degraded_page(reason),
    };

    let features = match OrderFeatures::new(
        form.price,
        form.qty_ordered,
        &form.category_name_1,
        form.month,
        form.date,
    ) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!(field = e.field(), error = %e, "dashboard submission failed validation");
            let banner = format!(
                r#"<div class="banner error">Invalid input: {}</div>"#,
                escape(&e.to_string())
            );
            return page(&form_html(), &banner);
        }
    };

    match services::predict_guarded(classifier, features.clone()).await {
        Ok(prediction) => page(&form_html(), &result_html(&features, &prediction)),
        Err(e) => {
            tracing::error!(error = %e, "dashboard classifier invocation failed");
            let banner = format!(
                r#"<div class="banner error">Prediction failed: {}</div>"#,
                escape(&e.to_string())
            );
            page(&form_html(), &banner)
        }
    }
}

fn result_html(features: &OrderFeatures, prediction: &Prediction) -> String {
    let mut out = String::new();

    if prediction.is_risky() {
        out.push_str(&format!(
            r#"<div class="banner error"><strong>GROSS (High Cancellation Risk)</strong></div>
<p>This order has a <strong>{}</strong> chance of being cancelled.</p>"#,
            prediction.probability_display()
        ));
        for insight in insights(features) {
            out.push_str(&format!(
                r#"<div class="banner warning">Insight: {insight}</div>"#
            ));
        }
    } else {
        out.push_str(&format!(
            r#"<div class="banner success"><strong>NET (Safe Order)</strong></div>
<p>This order is safe! Risk Score: <strong>{}</strong></p>"#,
            prediction.probability_display()
        ));
    }

    // Mirrors the original "See Internal Data" expander.
    let internal = serde_json::json!({
        "inputs": features.assemble(),
        "risk_score": prediction.risk_probability,
        "threshold_applied": RISK_THRESHOLD,
    });
    out.push_str(&format!(
        r#"<details><summary>See internal data</summary><pre>{}</pre></details>"#,
        escape(&serde_json::to_string_pretty(&internal).unwrap_or_default())
    ));

    out
}

fn form_html() -> String {
    let options: String = CATEGORIES
        .iter()
        .map(|c| {
            let c = escape(c);
            format!(r#"<option value="{c}">{c}</option>"#)
        })
        .collect();

    format!(
        r#"<form method="post" action="/dashboard">
  <fieldset>
    <legend>Order details</legend>
    <label>Item price (PKR)
      <input type="number" name="price" min="1" max="9999999" step="100" value="2000" required>
    </label>
    <label>Quantity
      <input type="number" name="qty_ordered" min="1" max="9" value="1" required>
    </label>
  </fieldset>
  <fieldset>
    <legend>Product &amp; time</legend>
    <label>Category
      <select name="category_name_1">{options}</select>
    </label>
    <label>Month (1=Jan, 12=Dec)
      <input type="number" name="month" min="1" max="12" value="11" required>
    </label>
    <label>Day of month
      <input type="number" name="date" min="1" max="31" value="15" required>
    </label>
  </fieldset>
  <button type="submit">Predict outcome</button>
</form>"#
    )
}

fn degraded_page(reason: &str) -> Html<String> {
    let banner = format!(
        r#"<div class="banner error">Prediction is currently unavailable: {}</div>"#,
        escape(reason)
    );
    page("", &banner)
}

fn page(form: &str, result: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>COD Order Validator</title>
<style>
  body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
  fieldset {{ margin-bottom: 1rem; }}
  label {{ display: block; margin: 0.5rem 0; }}
  .banner {{ padding: 0.75rem; margin: 0.75rem 0; border-radius: 4px; }}
  .banner.error {{ background: #fdecea; }}
  .banner.warning {{ background: #fff4e5; }}
  .banner.success {{ background: #edf7ed; }}
</style>
</head>
<body>
<h1>COD Order Validator</h1>
<p>Predicts whether a cash-on-delivery order will be completed (Net) or
cancelled (Gross), based on price, category, and seasonality.</p>
{form}
{result}
</body>
</html>"#
    ))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
