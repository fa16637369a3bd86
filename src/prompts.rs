use uuid::Uuid;

use crate::runware::DEFAULT_MODEL;
use crate::schema::{AdInput, Aspect, ModelDescriptor};
use crate::store::{BasePromptStore, StoredBasePrompt};

/// One generated prompt/aspect/style combination. A batch always produces
/// five, in a fixed order that callers zip against the remote results.
#[derive(Debug, Clone)]
pub struct Variant {
    pub id: String,
    pub prompt: String,
    pub aspect: Aspect,
    pub model: String,
    pub style: String,
}

const SCENE_TEMPLATES: [(&str, &str, Aspect); 5] = [
    (
        "Professional Office Scene",
        "Corporate office environment, professional business people in modern workspace, \
         clean corporate photography, high-end business setting, professional lighting, \
         corporate colors, space for headline text.",
        Aspect::Horizontal191,
    ),
    (
        "Business Dashboard",
        "Clean corporate dashboard or business analytics interface, professional data \
         visualization, modern business technology, corporate blue and white color scheme, \
         professional photography, space for marketing copy.",
        Aspect::Horizontal191,
    ),
    (
        "Business Meeting",
        "Professional handshake or business meeting scene, corporate executives, modern \
         conference room, professional photography, clean business aesthetic, corporate \
         colors, space for headline.",
        Aspect::Square,
    ),
    (
        "Corporate Architecture",
        "Modern corporate building exterior or office lobby, professional architecture \
         photography, clean lines, corporate branding, professional lighting, business \
         environment, space for text overlay.",
        Aspect::Square,
    ),
    (
        "Business Analytics",
        "Professional business charts and graphs, corporate data visualization, clean \
         infographic style, business analytics, professional color scheme, corporate \
         marketing materials, space for headline text.",
        Aspect::Vertical45,
    ),
];

/// Brand token: host without scheme and leading `www.`, cut at the first dot.
pub fn derive_brand(company_url: &str) -> String {
    let trimmed = company_url.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    without_www
        .split('.')
        .next()
        .unwrap_or(without_www)
        .to_string()
}

fn audience_list(audience: &str) -> String {
    audience
        .split(',')
        .map(str::trim)
        .take(3)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds the five variants and records each base prompt in the store so a
/// later regenerate can start from the exact same text.
pub fn build_five_variants(input: &AdInput, store: &dyn BasePromptStore) -> Vec<Variant> {
    let brand = derive_brand(&input.company_url);
    let product = if input.product_name.is_empty() {
        String::new()
    } else {
        format!(" {}", input.product_name)
    };
    let audience = audience_list(&input.audience);

    let base_context = format!(
        "Professional LinkedIn B2B advertisement for {brand}{product}, targeting {audience}. \
         Business value proposition: {value}. Corporate marketing style, clean business \
         aesthetic, professional photography quality.",
        value = input.business_value,
    );
    let cta_suffix = if input.render_cta_on_image {
        format!(" Include subtle CTA text area: \"{}\"", input.footer_text)
    } else {
        String::new()
    };

    SCENE_TEMPLATES
        .iter()
        .map(|(style, scene, aspect)| {
            let variant = Variant {
                id: Uuid::new_v4().to_string(),
                prompt: format!("{base_context} {scene}{cta_suffix}"),
                aspect: *aspect,
                model: DEFAULT_MODEL.to_string(),
                style: (*style).to_string(),
            };
            store.put(
                &variant.id,
                StoredBasePrompt::new(
                    variant.prompt.clone(),
                    input.clone(),
                    variant.model.clone(),
                    variant.style.clone(),
                ),
            );
            variant
        })
        .collect()
}

pub const CURATED_MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "runware:101@1",
        name: "Realistic",
        description: "High quality realistic images",
    },
    ModelDescriptor {
        id: "runware:100@1",
        name: "Artistic",
        description: "More artistic and stylized",
    },
];

#[cfg(test)]
mod tests {
    use crate::store::MemoryPromptStore;

    use super::*;

    fn input() -> AdInput {
        AdInput {
            company_url: "https://acme.io".to_string(),
            product_name: String::new(),
            business_value: "saves time".to_string(),
            audience: "CEO, CTO".to_string(),
            body_text: "x y z".to_string(),
            footer_text: "Try now".to_string(),
            render_cta_on_image: false,
        }
    }

    #[test]
    fn brand_strips_scheme_www_and_tld() {
        assert_eq!(derive_brand("https://acme.io"), "acme");
        assert_eq!(derive_brand("http://www.acme.co.uk"), "acme");
        assert_eq!(derive_brand("acme.io"), "acme");
        assert_eq!(derive_brand("https://www.sub.acme.io"), "sub");
    }

    #[test]
    fn audience_takes_first_three_tokens_trimmed() {
        assert_eq!(audience_list("CEO, CTO"), "CEO, CTO");
        assert_eq!(
            audience_list(" CEO ,CTO,  VP Sales , Founders"),
            "CEO, CTO, VP Sales"
        );
    }

    #[test]
    fn builds_five_variants_with_fixed_aspect_order() {
        let store = MemoryPromptStore::default();
        let variants = build_five_variants(&input(), &store);
        assert_eq!(variants.len(), 5);
        let aspects: Vec<Aspect> = variants.iter().map(|variant| variant.aspect).collect();
        assert_eq!(
            aspects,
            vec![
                Aspect::Horizontal191,
                Aspect::Horizontal191,
                Aspect::Square,
                Aspect::Square,
                Aspect::Vertical45,
            ]
        );
        let styles: Vec<&str> = variants.iter().map(|variant| variant.style.as_str()).collect();
        assert_eq!(
            styles,
            vec![
                "Professional Office Scene",
                "Business Dashboard",
                "Business Meeting",
                "Corporate Architecture",
                "Business Analytics",
            ]
        );
    }

    #[test]
    fn every_prompt_carries_brand_and_audience() {
        let store = MemoryPromptStore::default();
        let variants = build_five_variants(&input(), &store);
        for variant in &variants {
            assert!(variant.prompt.contains("acme"), "{}", variant.prompt);
            assert!(variant.prompt.contains("CEO, CTO"), "{}", variant.prompt);
            assert!(variant.prompt.contains("saves time"), "{}", variant.prompt);
            assert_eq!(variant.model, DEFAULT_MODEL);
        }
    }

    #[test]
    fn product_name_lands_after_brand() {
        let store = MemoryPromptStore::default();
        let mut with_product = input();
        with_product.product_name = "TimeSaver Pro".to_string();
        let variants = build_five_variants(&with_product, &store);
        assert!(variants[0].prompt.contains("acme TimeSaver Pro"));
    }

    #[test]
    fn cta_clause_only_when_requested() {
        let store = MemoryPromptStore::default();
        let plain = build_five_variants(&input(), &store);
        assert!(!plain[0].prompt.contains("CTA text area"));

        let mut with_cta = input();
        with_cta.render_cta_on_image = true;
        let variants = build_five_variants(&with_cta, &store);
        for variant in &variants {
            assert!(variant.prompt.ends_with("Include subtle CTA text area: \"Try now\""));
        }
    }

    #[test]
    fn each_variant_base_prompt_is_stored() {
        let store = MemoryPromptStore::default();
        let variants = build_five_variants(&input(), &store);
        for variant in &variants {
            let stored = store.get(&variant.id).unwrap();
            assert_eq!(stored.base_prompt, variant.prompt);
            assert_eq!(stored.style, variant.style);
            assert_eq!(stored.original_input.audience, "CEO, CTO");
        }
    }

    #[test]
    fn curated_models_are_static() {
        assert_eq!(CURATED_MODELS.len(), 2);
        assert_eq!(CURATED_MODELS[0].id, "runware:101@1");
        assert_eq!(CURATED_MODELS[1].name, "Artistic");
    }
}
