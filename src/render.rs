use anyhow::Context as _;
use tera::{Context, Tera};

/// Thin wrapper over the template engine. Templates are parsed once at
/// startup; rendering takes a template name plus a context mapping and
/// produces the HTML body.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Loads every `*.html` under `dir`, recursively.
    pub fn from_dir(dir: &str) -> anyhow::Result<Self> {
        let glob = format!("{}/**/*.html", dir.trim_end_matches('/'));
        let tera = Tera::new(&glob).with_context(|| format!("load templates from {}", dir))?;
        Ok(Self { tera })
    }

    /// Builds from inline (name, source) pairs instead of the filesystem.
    pub fn from_raw(templates: &[(&str, &str)]) -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.to_vec())?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, ctx: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_named_template_with_context() {
        let templates = Templates::from_raw(&[("hello.html", "Hello {{ who }}!")]).unwrap();
        let mut ctx = Context::new();
        ctx.insert("who", "world");
        let body = templates.render("hello.html", &ctx).unwrap();
        assert_eq!(body, "Hello world!");
    }

    #[test]
    fn missing_template_is_an_error() {
        let templates = Templates::from_raw(&[]).unwrap();
        let err = templates.render("missing.html", &Context::new()).unwrap_err();
        assert!(err.to_string().contains("missing.html"));
    }

    #[test]
    fn html_values_are_escaped() {
        let templates = Templates::from_raw(&[("x.html", "{{ v }}")]).unwrap();
        let mut ctx = Context::new();
        ctx.insert("v", "<script>alert(1)</script>");
        let body = templates.render("x.html", &ctx).unwrap();
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }
}
