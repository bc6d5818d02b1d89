//! Text rendering of the workflow skeleton.

use common::{OutputLine, OutputSink};
use domain::PaymentMethod;
use processing::{Step, StepKind, variant_for};

const NAME_WIDTH: usize = 30;

/// Writes the step sequence and the variants that plug into it.
pub fn render_workflow(sink: &mut dyn OutputSink) {
    let mut emit = |text: String| sink.emit(OutputLine::info(text));

    emit("WORKFLOW SKELETON: process_order()".to_string());
    for step in Step::ALL {
        let branch = if step == Step::AfterProcessing { "└─" } else { "├─" };
        let call = format!("{}. {}()", step.position(), step);
        emit(format!("{branch} {call:<NAME_WIDTH$} [{}]", label(step)));
    }

    emit(String::new());
    emit("PAYMENT VARIANTS:".to_string());
    for method in PaymentMethod::ALL {
        let variant = variant_for(method);
        emit(format!(
            "   • {:<15} {}",
            variant.method().as_str(),
            method.display_name()
        ));
    }

    emit(String::new());
    emit(format!(
        "Each variant implements {} and may override {}.",
        names(StepKind::Variant),
        names(StepKind::Hook)
    ));
}

fn label(step: Step) -> String {
    let kind = match step.kind() {
        StepKind::Common => "common",
        StepKind::Variant => "variant-specific",
        StepKind::Hook => "optional hook",
    };
    if step.can_fail() {
        format!("{kind}, may reject")
    } else {
        kind.to_string()
    }
}

fn names(kind: StepKind) -> String {
    Step::ALL
        .iter()
        .filter(|step| step.kind() == kind)
        .map(|step| format!("{step}()"))
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::CapturedOutput;

    #[test]
    fn test_lists_every_step_in_order() {
        let mut out = CapturedOutput::new();
        render_workflow(&mut out);

        let rows: Vec<&str> = out
            .lines()
            .iter()
            .map(|line| line.text.as_str())
            .filter(|text| text.starts_with("├─") || text.starts_with("└─"))
            .collect();
        assert_eq!(rows.len(), 9);
        assert!(rows[0].contains("1. before_processing()"));
        assert!(rows[0].ends_with("[optional hook]"));
        assert!(rows[4].contains("5. process_payment()"));
        assert!(rows[4].ends_with("[variant-specific, may reject]"));
        assert!(rows[6].ends_with("[variant-specific]"));
        assert!(rows[8].starts_with("└─ 9. after_processing()"));
    }

    #[test]
    fn test_marks_only_rejecting_steps() {
        let mut out = CapturedOutput::new();
        render_workflow(&mut out);

        let rejecting: Vec<&str> = out
            .lines()
            .iter()
            .map(|line| line.text.as_str())
            .filter(|text| text.ends_with("may reject]"))
            .collect();
        assert_eq!(rejecting.len(), 3);
        assert!(rejecting[0].contains("2. validate_order()"));
        assert!(rejecting[0].ends_with("[common, may reject]"));
        assert!(rejecting[1].contains("3. check_inventory()"));
        assert!(rejecting[2].contains("5. process_payment()"));
    }

    #[test]
    fn test_names_variant_and_hook_steps() {
        let mut out = CapturedOutput::new();
        render_workflow(&mut out);

        assert!(out.contains(
            "Each variant implements process_payment() and send_payment_confirmation() \
             and may override before_processing() and after_processing()."
        ));
        assert!(out.contains("bank-transfer"));
        assert_eq!(out.errors().count(), 0);
    }
}
