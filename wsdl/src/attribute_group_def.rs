use super::{
    attribute_decl::AttributeSpec,
    error::Result,
    mapping_context::{InProgress, MappingContext},
    values::{attribute_value, children_named},
    xstypes::{QualifiedName, Sequence},
};
use roxmltree::Node;

pub const TAG_NAME: &str = "attributeGroup";

/// The attributes declared on `node`: its `<attribute>` children first, followed by the
/// attributes of each referenced attribute group, in order.
pub(crate) fn extract_attributes(
    context: &mut MappingContext,
    node: Node,
) -> Result<Sequence<AttributeSpec>> {
    let mut attributes = children_named(node, AttributeSpec::TAG_NAME)
        .map(|attribute| AttributeSpec::map_from_xml(context, attribute))
        .collect::<Sequence<_>>();

    for group in children_named(node, TAG_NAME) {
        if let Some(reference) = attribute_value::<QualifiedName>(group, "ref") {
            attributes.extend(expand(context, &reference)?);
        }
    }

    Ok(attributes)
}

/// Resolves an `<attributeGroup ref="..."/>` to the attributes of the named group. A group that
/// is not declared contributes nothing.
pub(crate) fn expand(
    context: &mut MappingContext,
    reference: &QualifiedName,
) -> Result<Sequence<AttributeSpec>> {
    context.guarded(
        InProgress::AttributeGroup(reference.local.clone()),
        |context| match context.schema().top_level_of_kind(TAG_NAME, &reference.local) {
            Some(group) => {
                tracing::debug!("expanding attribute group {reference}");
                extract_attributes(context, group)
            }
            None => {
                tracing::warn!("attribute group {reference} is not declared");
                Ok(Sequence::new())
            }
        },
    )
}
