//! Idea-generation use cases built on the gateway.
//!
//! The prompt builders are pure so their wording can be checked without a
//! provider. The matching [`Gateway`] methods send the built prompt through
//! [`Gateway::generate_text`] and share its admission control.

use crate::{Gateway, Transport};
use ideaforge_core::IdeaDraft;
use ideaforge_error::{GatewayError, GatewayErrorKind, GatewayResult};
use tracing::{instrument, warn};

/// Prompt asking for a sharper version of `idea`.
pub fn refine_idea_prompt(idea: &IdeaDraft) -> String {
    format!(
        "Refine the following idea. Keep its core intent, make it more specific \
         and actionable, and point out one risk worth addressing.\n\n\
         Title: {}\nDescription: {}",
        idea.title(),
        idea.description()
    )
}

/// Prompt asking for one idea that merges all of `ideas`.
pub fn combine_ideas_prompt(ideas: &[IdeaDraft]) -> String {
    let listed = ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| format!("{}. {}: {}", i + 1, idea.title(), idea.description()))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Combine the following ideas into a single new idea that draws on the \
         strengths of each. Give it a title and a short description.\n\n{}",
        listed
    )
}

/// Prompt that fills `template` using `context`.
pub fn template_prompt(template: &str, context: &str) -> String {
    format!(
        "Generate an idea by following this template:\n{}\n\nContext:\n{}",
        template, context
    )
}

/// Prompt asking for a variation of `idea` under the constraint `twist`.
pub fn twist_prompt(idea: &IdeaDraft, twist: &str) -> String {
    format!(
        "Suggest a variation of the following idea with this twist: {}\n\n\
         Title: {}\nDescription: {}",
        twist,
        idea.title(),
        idea.description()
    )
}

impl<T: Transport> Gateway<T> {
    /// Ask the provider to refine a single idea.
    #[instrument(skip(self, idea), fields(title = %idea.title()))]
    pub async fn refine_idea(&self, idea: &IdeaDraft) -> GatewayResult<String> {
        self.generate_text(&refine_idea_prompt(idea)).await
    }

    /// Ask the provider to merge several ideas into one.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` without consuming a permit when fewer than two ideas
    /// are given.
    #[instrument(skip(self, ideas), fields(count = ideas.len()))]
    pub async fn combine_ideas(&self, ideas: &[IdeaDraft]) -> GatewayResult<String> {
        if ideas.len() < 2 {
            warn!("Combining needs at least two ideas");
            return Err(GatewayError::new(GatewayErrorKind::Unknown {
                status: None,
                message: format!("combine_ideas needs at least 2 ideas, got {}", ideas.len()),
            }));
        }
        self.generate_text(&combine_ideas_prompt(ideas)).await
    }

    /// Generate an idea from a template and free-form context.
    #[instrument(skip_all, fields(template_len = template.len(), context_len = context.len()))]
    pub async fn generate_from_template(
        &self,
        template: &str,
        context: &str,
    ) -> GatewayResult<String> {
        self.generate_text(&template_prompt(template, context)).await
    }

    /// Suggest a variation of `idea` under an extra constraint.
    #[instrument(skip(self, idea, twist), fields(title = %idea.title()))]
    pub async fn suggest_with_twist(&self, idea: &IdeaDraft, twist: &str) -> GatewayResult<String> {
        self.generate_text(&twist_prompt(idea, twist)).await
    }
}
