//! The fixed catalogue of workflow steps.

/// Who supplies a step's behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Implemented once by the workflow and shared by every variant.
    Common,

    /// Must be implemented by each payment variant.
    Variant,

    /// Optional; a no-op unless the variant overrides it.
    Hook,
}

impl StepKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Common => "common",
            StepKind::Variant => "variant",
            StepKind::Hook => "hook",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step of the order-processing workflow.
///
/// Steps run strictly in the order of [`Step::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    BeforeProcessing,
    ValidateOrder,
    CheckInventory,
    CalculateDiscount,
    ProcessPayment,
    GenerateInvoice,
    SendPaymentConfirmation,
    NotifyCustomer,
    AfterProcessing,
}

impl Step {
    /// Every step in execution order.
    pub const ALL: [Step; 9] = [
        Step::BeforeProcessing,
        Step::ValidateOrder,
        Step::CheckInventory,
        Step::CalculateDiscount,
        Step::ProcessPayment,
        Step::GenerateInvoice,
        Step::SendPaymentConfirmation,
        Step::NotifyCustomer,
        Step::AfterProcessing,
    ];

    /// Returns who supplies this step.
    pub fn kind(&self) -> StepKind {
        match self {
            Step::BeforeProcessing | Step::AfterProcessing => StepKind::Hook,
            Step::ProcessPayment | Step::SendPaymentConfirmation => StepKind::Variant,
            Step::ValidateOrder
            | Step::CheckInventory
            | Step::CalculateDiscount
            | Step::GenerateInvoice
            | Step::NotifyCustomer => StepKind::Common,
        }
    }

    /// Returns true if the step can report a business failure.
    ///
    /// Every step can still fault.
    pub fn can_fail(&self) -> bool {
        matches!(
            self,
            Step::ValidateOrder | Step::CheckInventory | Step::ProcessPayment
        )
    }

    /// Returns the 1-based position of the step in the sequence.
    pub fn position(&self) -> usize {
        Step::ALL.iter().position(|s| s == self).map_or(0, |i| i + 1)
    }

    /// Returns the step name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::BeforeProcessing => "before_processing",
            Step::ValidateOrder => "validate_order",
            Step::CheckInventory => "check_inventory",
            Step::CalculateDiscount => "calculate_discount",
            Step::ProcessPayment => "process_payment",
            Step::GenerateInvoice => "generate_invoice",
            Step::SendPaymentConfirmation => "send_payment_confirmation",
            Step::NotifyCustomer => "notify_customer",
            Step::AfterProcessing => "after_processing",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_fixed() {
        let names: Vec<&str> = Step::ALL.iter().map(Step::as_str).collect();
        assert_eq!(
            names,
            vec![
                "before_processing",
                "validate_order",
                "check_inventory",
                "calculate_discount",
                "process_payment",
                "generate_invoice",
                "send_payment_confirmation",
                "notify_customer",
                "after_processing",
            ]
        );
    }

    #[test]
    fn test_only_steps_one_five_seven_nine_vary() {
        let varying: Vec<usize> = Step::ALL
            .iter()
            .filter(|s| s.kind() != StepKind::Common)
            .map(Step::position)
            .collect();
        assert_eq!(varying, vec![1, 5, 7, 9]);
    }

    #[test]
    fn test_failing_steps() {
        let failing: Vec<Step> = Step::ALL.into_iter().filter(Step::can_fail).collect();
        assert_eq!(
            failing,
            vec![Step::ValidateOrder, Step::CheckInventory, Step::ProcessPayment]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::ProcessPayment.to_string(), "process_payment");
        assert_eq!(StepKind::Hook.to_string(), "hook");
    }
}
