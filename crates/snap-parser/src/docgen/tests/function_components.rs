use pretty_assertions::assert_eq;

use super::*;

#[test]
fn arrow_component_with_domain_type() {
    let doc = extract_js(include_str!("../../../tests/fixtures/order_summary.js"));
    assert_eq!(doc.display_name.as_deref(), Some("OrderSummary"));
    let order = find_prop(&doc, "order");
    assert!(order.required);
    assert_eq!(order.kind(), Some(PropKind::Custom));
    assert_eq!(order.raw(), Some("RomanPropTypes.Order.isRequired"));
}

#[test]
fn destructured_parameter_default_attaches() {
    let doc = extract_js(include_str!("../../../tests/fixtures/order_summary.js"));
    assert_eq!(
        find_prop(&doc, "title").declared_default.as_deref(),
        Some("'Your order'")
    );
    assert_eq!(find_prop(&doc, "onCancel").declared_default, None);
}

#[test]
fn component_without_props() {
    let doc = extract_js(include_str!("../../../tests/fixtures/no_props.js"));
    assert_eq!(doc.display_name.as_deref(), Some("Divider"));
    assert_eq!(doc.props, None);
    assert_eq!(doc.description, "");
}

#[test]
fn default_props_override_parameter_defaults() {
    let doc = extract_js(
        r"
function Pill({ tone = 'soft' }) { return <i />; }
Pill.propTypes = { tone: PropTypes.string };
Pill.defaultProps = { tone: 'loud' };
",
    );
    assert_eq!(
        find_prop(&doc, "tone").declared_default.as_deref(),
        Some("'loud'")
    );
}

#[test]
fn prop_types_bound_to_a_const() {
    let doc = extract_js(
        r"
const propTypes = { size: PropTypes.number };
const Dot = (props) => <b />;
Dot.propTypes = propTypes;
",
    );
    assert_eq!(find_prop(&doc, "size").kind(), Some(PropKind::Number));
}

#[test]
fn assigned_prop_types_without_jsx() {
    let doc = extract_js(
        r"
function Slot(props) { return props.render(); }
Slot.propTypes = { render: PropTypes.func.isRequired };
",
    );
    assert_eq!(doc.display_name.as_deref(), Some("Slot"));
    assert!(find_prop(&doc, "render").required);
}

#[test]
fn anonymous_default_export_has_no_display_name() {
    let doc = extract_js("export default ({ size = 1 }) => <hr />;");
    assert_eq!(doc.display_name, None);
    assert_eq!(prop_names(&doc), ["size"]);
}

#[test]
fn extractor_picks_grammar_from_path() {
    let source = "export const Tag = ({ text }: { text: string }) => <em>{text}</em>;";
    let doc = DocgenExtractor::new()
        .extract(source, Path::new("src/Tag.tsx"))
        .expect("tsx component");
    assert_eq!(doc.display_name.as_deref(), Some("Tag"));
}
