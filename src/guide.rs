//! The "port this design to Shopify" guide.
//!
//! Static, typed content: ordered steps with copyable Liquid/HTML snippets.
//! The frontend renders the steps and calls [`snippet_by_id`] when the user
//! hits a copy button.

use serde::Serialize;

const HEAD_SNIPPET: &str = r#"<!-- 1. Pega esto en tu theme.liquid antes de </head> -->
<script src="https://cdn.tailwindcss.com"></script>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
<style>
  body { font-family: 'Inter', sans-serif; }
</style>"#;

const HERO_SNIPPET: &str = r#"<!-- 2. Crea una sección "Custom Liquid" y pega esto para el Hero -->
<section class="py-20 px-4 bg-white text-center">
  <div class="max-w-7xl mx-auto space-y-8">
    <h1 class="text-5xl md:text-7xl font-bold tracking-tight text-slate-900">
      Importaciones sin límites. <br/>
      <span class="text-slate-400">Precios directos de EE.UU.</span>
    </h1>
    <p class="text-lg text-slate-500 max-w-2xl mx-auto">
      En The White Order facilitamos el acceso a tecnología y artículos exclusivos de Estados Unidos.
    </p>
    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
      <a href="/collections/all" class="px-8 py-4 bg-black text-white rounded-full font-bold">Ver Catálogo</a>
      <a href="https://wa.me/tu-numero" class="px-8 py-4 border border-slate-200 rounded-full font-bold">WhatsApp</a>
    </div>
  </div>
</section>"#;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontGuide {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<GuideStep>,
    pub note: GuideNote,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideStep {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<GuideSnippet>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSnippet {
    pub id: String,
    pub label: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideNote {
    pub title: String,
    pub body: String,
}

/// Build the storefront porting guide.
pub fn storefront_guide() -> StorefrontGuide {
    StorefrontGuide {
        title: "Guía para Shopify".to_string(),
        subtitle: "Cómo pasar este diseño a tu tienda online".to_string(),
        steps: vec![
            GuideStep {
                id: "prepare-theme".to_string(),
                title: "Preparar el Tema".to_string(),
                body: "Ve a Tienda online > Temas > Editar código. En el archivo theme.liquid, \
                       pega esto antes de la etiqueta </head>:"
                    .to_string(),
                snippet: Some(GuideSnippet {
                    id: "head".to_string(),
                    label: "theme.liquid".to_string(),
                    code: HEAD_SNIPPET.to_string(),
                }),
            },
            GuideStep {
                id: "create-sections".to_string(),
                title: "Crear Secciones".to_string(),
                body: "En el Editor de Temas, añade una sección de tipo \"Custom Liquid\" o \
                       \"HTML personalizado\" y pega el código de cada bloque:"
                    .to_string(),
                snippet: Some(GuideSnippet {
                    id: "hero".to_string(),
                    label: "Sección Hero".to_string(),
                    code: HERO_SNIPPET.to_string(),
                }),
            },
        ],
        note: GuideNote {
            title: "Nota importante".to_string(),
            body: "Las funciones de edición con IA y el estado dinámico de la página no \
                   funcionan directamente en Liquid. Shopify maneja los datos a través de su \
                   propio \"Personalizador\". Usa esta app como referencia visual para \
                   construir tus bloques en Shopify."
                .to_string(),
        },
    }
}

/// Look up a snippet for the copy-to-clipboard action.
pub fn snippet_by_id(guide: &StorefrontGuide, id: &str) -> Option<GuideSnippet> {
    guide
        .steps
        .iter()
        .filter_map(|step| step.snippet.as_ref())
        .find(|snippet| snippet.id == id)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_has_ordered_steps_with_snippets() {
        let guide = storefront_guide();
        assert_eq!(guide.steps.len(), 2);
        assert_eq!(guide.steps[0].id, "prepare-theme");
        assert_eq!(guide.steps[1].id, "create-sections");
        assert!(guide.steps.iter().all(|s| !s.body.is_empty()));
    }

    #[test]
    fn snippets_resolve_by_id() {
        let guide = storefront_guide();
        let head = snippet_by_id(&guide, "head").unwrap();
        assert!(head.code.contains("theme.liquid"));
        let hero = snippet_by_id(&guide, "hero").unwrap();
        assert!(hero.code.contains("Custom Liquid"));
        assert!(snippet_by_id(&guide, "footer").is_none());
    }
}
