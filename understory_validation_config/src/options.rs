// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation option structures and their defaults.

use alloc::string::String;
use alloc::vec::Vec;

/// Names a collaborator implementation for the container to instantiate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImplementationKey(&'static str);

impl ImplementationKey {
    /// The built-in rule validator.
    pub const STANDARD_VALIDATOR: Self = Self("StandardValidator");
    /// The built-in message provider.
    pub const VALIDATION_MESSAGE_PROVIDER: Self = Self("ValidationMessageProvider");
    /// The built-in hydrator for serialized validation rules.
    pub const MODEL_VALIDATION_EXPRESSION_HYDRATOR: Self =
        Self("ModelValidationExpressionHydrator");
    /// The built-in validation controller factory.
    pub const VALIDATION_CONTROLLER_FACTORY: Self = Self("ValidationControllerFactory");

    /// Creates a key for a custom implementation.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The implementation name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// When a bound value is validated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidationTrigger {
    /// Only when the controller is asked to validate.
    Manual,
    /// When the element loses focus.
    #[default]
    Blur,
    /// When focus leaves the element or its descendants.
    Focusout,
    /// Whenever the bound value changes.
    Change,
    /// On change and on blur.
    ChangeOrBlur,
    /// On change and on focusout.
    ChangeOrFocusout,
}

/// A message alias for a validation rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageAlias {
    /// Alias name.
    pub name: String,
    /// Message used when the alias has no specific one.
    pub default_message: Option<String>,
}

/// Custom messages for one validation rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomMessage {
    /// The rule the messages apply to.
    pub rule: String,
    /// Message aliases for the rule.
    pub aliases: Vec<MessageAlias>,
}

/// Options of the base validation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Validator implementation.
    pub validator: ImplementationKey,
    /// Message provider implementation.
    pub message_provider: ImplementationKey,
    /// Rule hydrator implementation.
    pub hydrator: ImplementationKey,
    /// Additional rule messages.
    pub custom_messages: Vec<CustomMessage>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            validator: ImplementationKey::STANDARD_VALIDATOR,
            message_provider: ImplementationKey::VALIDATION_MESSAGE_PROVIDER,
            hydrator: ImplementationKey::MODEL_VALIDATION_EXPRESSION_HYDRATOR,
            custom_messages: Vec::new(),
        }
    }
}

/// Options of the HTML validation configuration.
///
/// The base options live in [`validation`](Self::validation); they are the
/// only fields handed on to the base configuration at registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationHtmlOptions {
    /// Fields shared with the base validation configuration.
    pub validation: ValidationOptions,
    /// Factory used to create validation controllers.
    pub controller_factory: ImplementationKey,
    /// Trigger used by bindings that do not name one.
    pub default_trigger: ValidationTrigger,
    /// Register the validation errors custom attribute.
    pub use_subscriber_custom_attribute: bool,
    /// Register the validation container custom element.
    pub use_subscriber_custom_element: bool,
}

impl Default for ValidationHtmlOptions {
    fn default() -> Self {
        Self {
            validation: ValidationOptions::default(),
            controller_factory: ImplementationKey::VALIDATION_CONTROLLER_FACTORY,
            default_trigger: ValidationTrigger::Blur,
            use_subscriber_custom_attribute: true,
            use_subscriber_custom_element: true,
        }
    }
}
