// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container registration.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::options::{ImplementationKey, ValidationHtmlOptions, ValidationOptions, ValidationTrigger};

/// A collaborator installed into a [`Container`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    /// Factory for validation controllers.
    ControllerFactory(ImplementationKey),
    /// The customized base validation configuration.
    Validation(ValidationOptions),
    /// Trigger for bindings that do not name one.
    DefaultTrigger(ValidationTrigger),
    /// The `validate` binding behavior.
    ValidateBindingBehavior,
    /// The validation errors custom attribute.
    ValidationErrorsCustomAttribute,
    /// The validation container custom element.
    ValidationContainerCustomElement,
}

/// Receives registrations.
pub trait Container {
    /// Installs one collaborator.
    fn register(&mut self, registration: Registration);
}

impl Container for Vec<Registration> {
    fn register(&mut self, registration: Registration) {
        self.push(registration);
    }
}

/// Callback that adjusts the default options before registration.
pub type OptionsProvider = Rc<dyn Fn(&mut ValidationHtmlOptions)>;

/// Registers HTML validation with a container.
///
/// The configuration itself is immutable; [`customize`](Self::customize)
/// returns a new one.
///
/// ```rust
/// use understory_validation_config::{Registration, ValidationHtmlConfiguration, ValidationTrigger};
///
/// let config = ValidationHtmlConfiguration::new().customize(|options| {
///     options.default_trigger = ValidationTrigger::Change;
///     options.use_subscriber_custom_element = false;
/// });
///
/// let mut container: Vec<Registration> = Vec::new();
/// config.register(&mut container);
///
/// assert!(container.contains(&Registration::DefaultTrigger(ValidationTrigger::Change)));
/// assert!(!container.contains(&Registration::ValidationContainerCustomElement));
/// ```
#[derive(Clone, Default)]
pub struct ValidationHtmlConfiguration {
    provider: Option<OptionsProvider>,
}

impl ValidationHtmlConfiguration {
    /// Creates a configuration that registers the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a configuration that customizes options with `provider`.
    #[must_use]
    pub fn customize(&self, provider: impl Fn(&mut ValidationHtmlOptions) + 'static) -> Self {
        Self {
            provider: Some(Rc::new(provider)),
        }
    }

    /// Returns a configuration using `provider`, or this configuration's
    /// callback when `provider` is `None`.
    #[must_use]
    pub fn customize_or_keep(&self, provider: Option<OptionsProvider>) -> Self {
        Self {
            provider: provider.or_else(|| self.provider.clone()),
        }
    }

    /// The options registration would use: the defaults after customization.
    #[must_use]
    pub fn options(&self) -> ValidationHtmlOptions {
        let mut options = ValidationHtmlOptions::default();
        if let Some(provider) = &self.provider {
            provider(&mut options);
        }
        options
    }

    /// Installs validation into `container`.
    ///
    /// The controller factory, the base validation options, the default
    /// trigger and the binding behavior are always registered, in that order.
    /// The errors attribute and the container element follow when enabled.
    pub fn register<C: Container + ?Sized>(&self, container: &mut C) {
        let options = self.options();
        debug!(
            "registering validation (trigger {:?}, attribute {}, element {})",
            options.default_trigger,
            options.use_subscriber_custom_attribute,
            options.use_subscriber_custom_element
        );

        container.register(Registration::ControllerFactory(options.controller_factory));
        container.register(Registration::Validation(options.validation));
        container.register(Registration::DefaultTrigger(options.default_trigger));
        container.register(Registration::ValidateBindingBehavior);
        if options.use_subscriber_custom_attribute {
            container.register(Registration::ValidationErrorsCustomAttribute);
        }
        if options.use_subscriber_custom_element {
            container.register(Registration::ValidationContainerCustomElement);
        }
    }
}

impl fmt::Debug for ValidationHtmlConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationHtmlConfiguration")
            .field("customized", &self.provider.is_some())
            .finish_non_exhaustive()
    }
}
