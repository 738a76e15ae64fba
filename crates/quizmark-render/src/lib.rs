//! Quiz rendering engine.
//!
//! Renders a [`quizmark_model::Quiz`] into a standalone HTML document for
//! two audiences: test-takers (blank mode) and graders (solution mode, with
//! correctness classes and explanations).
//!
//! # Architecture
//!
//! Markup flows one way through three layers:
//! - [`MarkupSink`]: append-only emitter over a `quick_xml` event writer
//! - answer/question renderers: per-variant selection, ordering and
//!   escaping policy
//! - [`QuizRenderer`]: seed pinning, question iteration and document
//!   assembly through a [`DocumentLayout`]
//!
//! Document assembly has two interchangeable implementations:
//! [`DefaultLayout`] (built-in minimal shell) and [`TemplateLayout`]
//! (external `tera` template with a `{{ questions }}` expansion point).
//!
//! Answer shuffling is driven by a generator seeded from the quiz's seed,
//! so a render is a pure function of its input: same quiz, same options,
//! same bytes out.
//!
//! # Example
//!
//! ```
//! use quizmark_model::{Format, load_quizzes_str};
//! use quizmark_render::{QuizRenderer, RenderOptions};
//!
//! let source = "\
//! title: Demo
//! seed: 7
//! questions:
//! - type: true_false
//!   text: Water is wet
//!   answers:
//!   - text: \"True\"
//!     correct: true
//!   - text: \"False\"
//! ";
//! let quizzes = load_quizzes_str(source, Format::Yaml)?;
//! let renderer = QuizRenderer::new(RenderOptions::default());
//! let document = renderer.render(&quizzes[0])?;
//! assert!(document.contains("<!--Seed: 7-->"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod answers;
mod error;
mod layout;
mod question;
mod renderer;
mod sink;

pub use error::{RenderError, TemplateError};
pub use layout::{DefaultLayout, DocumentLayout, QuizMeta, TemplateLayout};
pub use renderer::{QuizRenderer, RenderOptions};
pub use sink::MarkupSink;
