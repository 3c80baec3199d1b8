//! Rendering of a single mock.

use std::fmt::Write;

use mockgen_core::BoxError;

use crate::{TypeDescriptor, TypeKind};

/// Renders the mock for one type descriptor.
///
/// Implementations are called concurrently from several worker threads and
/// must not depend on the order in which descriptors are rendered.
pub trait MockRenderer: Sync {
    fn render(&self, ty: &TypeDescriptor) -> Result<String, BoxError>;
}

impl<T: MockRenderer + ?Sized> MockRenderer for &T {
    fn render(&self, ty: &TypeDescriptor) -> Result<String, BoxError> {
        (**self).render(ty)
    }
}

impl<T: MockRenderer + ?Sized> MockRenderer for Box<T> {
    fn render(&self, ty: &TypeDescriptor) -> Result<String, BoxError> {
        self.as_ref().render(ty)
    }
}

/// Renders a mock skeleton: the mock class, a stub per member and a factory
/// function.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    runtime: String,
}

impl TemplateRenderer {
    /// Create a renderer whose mocks conform to `<runtime>.Mock`.
    pub fn new(runtime: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
        }
    }
}

impl MockRenderer for TemplateRenderer {
    fn render(&self, ty: &TypeDescriptor) -> Result<String, BoxError> {
        let name = ty.name.as_str();
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(format!("`{name}` is not a valid type name").into());
        }

        let (supertypes, metatype) = match ty.kind {
            TypeKind::Protocol => (format!("{}.Mock, {name}", self.runtime), "Protocol"),
            TypeKind::Class => (format!("{name}, {}.Mock", self.runtime), "Type"),
        };

        let mut out = String::new();
        writeln!(out, "// MARK: - Mocked {name}")?;
        writeln!(out)?;
        writeln!(out, "public final class {name}Mock: {supertypes} {{")?;
        for member in &ty.members {
            writeln!(out, "  // stub: {}", member.trim())?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "/// Returns a mock of `{name}`.")?;
        writeln!(out, "public func mock(_ type: {name}.{metatype}) -> {name}Mock {{")?;
        writeln!(out, "  return {name}Mock()")?;
        write!(out, "}}")?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_protocol() {
        let ty = TypeDescriptor::new("Cart", TypeKind::Protocol).member("func add(_ item: Item)");
        let text = TemplateRenderer::new("Kit").render(&ty).unwrap();

        assert_eq!(
            text,
            "// MARK: - Mocked Cart\n\
             \n\
             public final class CartMock: Kit.Mock, Cart {\n\
             \x20 // stub: func add(_ item: Item)\n\
             }\n\
             \n\
             /// Returns a mock of `Cart`.\n\
             public func mock(_ type: Cart.Protocol) -> CartMock {\n\
             \x20 return CartMock()\n\
             }"
        );
    }

    #[test]
    fn test_render_class() {
        let ty = TypeDescriptor::new("Store", TypeKind::Class);
        let text = TemplateRenderer::new("Kit").render(&ty).unwrap();

        assert!(text.contains("public final class StoreMock: Store, Kit.Mock {\n}"));
        assert!(text.contains("mock(_ type: Store.Type)"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_render_rejects_invalid_name() {
        let ty = TypeDescriptor::new("Not A Type", TypeKind::Class);
        let err = TemplateRenderer::new("Kit").render(&ty).unwrap_err();
        assert_eq!(err.to_string(), "`Not A Type` is not a valid type name");
    }

    #[test]
    fn test_renderer_through_box() {
        let renderer: Box<dyn MockRenderer> = Box::new(TemplateRenderer::new("Kit"));
        let ty = TypeDescriptor::new("Clock", TypeKind::Protocol);
        assert!(renderer.render(&ty).unwrap().contains("ClockMock"));
    }
}
