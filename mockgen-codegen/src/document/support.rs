//! Support declarations shared by every mock in a file.
//!
//! These are emitted as plain text ahead of the rendered mocks; the generator
//! itself never interprets them.

use mockgen_core::Content;

/// Lock-guarded value wrapper used by the generated static mock registry.
pub const SYNCHRONIZED_WRAPPER: &str = r#"private class Synchronized<T> {
  private var internalValue: T
  fileprivate var value: T {
    get {
      lock.wait()
      defer { lock.signal() }
      return internalValue
    }

    set {
      lock.wait()
      defer { lock.signal() }
      internalValue = newValue
    }
  }
  private let lock = DispatchSemaphore(value: 1)

  fileprivate init(_ value: T) {
    self.internalValue = value
  }

  fileprivate func update(_ block: (inout T) throws -> Void) rethrows {
    lock.wait()
    defer { lock.signal() }
    try block(&internalValue)
  }
}"#;

/// Declaration of the registry holding static mocks of generic types.
pub fn static_mock_registry(runtime: &str) -> String {
    format!(
        "private var genericTypesStaticMocks = Synchronized<[String: {runtime}.StaticMock]>([:])"
    )
}

/// The support leaves, in emission order.
pub fn leaves(runtime: &str) -> Vec<Content> {
    vec![
        Content::leaf(SYNCHRONIZED_WRAPPER),
        Content::leaf(static_mock_registry(runtime)),
    ]
}
