//! Domain → wire serialization.

use std::collections::HashMap;

use flyte_api::identifier::{Identifier, PartialTaskIdentifier, PartialWorkflowIdentifier};
use flyte_api::interface::{LiteralType, SimpleType, TypedInterface, Variable};
use flyte_api::literal::{
    Binding, BindingData, KeyValuePair, Literal, OutputReference, Primitive, Scalar,
};
use flyte_api::task::{Container, TaskTemplate};
use flyte_api::workflow::{
    BooleanExpression, BranchNode, ComparisonExpression, ComparisonOperator, IfBlock, IfElseBlock,
    LogicalOperator, Node, NodeKind, Operand, WorkflowMetadata, WorkflowTemplate,
};
use jiff::{SignedDuration, Timestamp};

use super::Codec;
use crate::TRACING_TARGET;
use crate::wire;

/// Converts to the wire timestamp convention: nanos count forward
/// within the second, so pre-epoch instants floor the seconds field.
fn timestamp_to_wire(timestamp: &Timestamp) -> wire::Timestamp {
    let mut seconds = timestamp.as_second();
    let mut nanos = timestamp.subsec_nanosecond();
    if nanos < 0 {
        seconds -= 1;
        nanos += 1_000_000_000;
    }
    wire::Timestamp { seconds, nanos }
}

/// Converts to the wire duration convention: seconds and nanos carry
/// the same sign, which jiff already guarantees.
fn duration_to_wire(duration: &SignedDuration) -> wire::Duration {
    wire::Duration {
        seconds: duration.as_secs(),
        nanos: duration.subsec_nanos(),
    }
}

impl Codec {
    /// Serializes a fully qualified resource identifier.
    ///
    /// Dispatch is an exhaustive match over the closed identifier sum;
    /// the four coordinates are copied verbatim.
    pub fn serialize_identifier(&self, id: &Identifier) -> wire::Identifier {
        let resource_type = match id {
            Identifier::Task(_) => wire::ResourceType::Task,
            Identifier::Workflow(_) => wire::ResourceType::Workflow,
            Identifier::LaunchPlan(_) => wire::ResourceType::LaunchPlan,
        };

        wire::Identifier {
            resource_type,
            project: id.project().to_string(),
            domain: id.domain().to_string(),
            name: id.name().to_string(),
            version: id.version().to_string(),
        }
    }

    /// Serializes a possibly-partial task identifier; unresolved fields
    /// serialize as empty strings.
    pub fn serialize_partial_task_identifier(
        &self,
        id: &PartialTaskIdentifier,
    ) -> wire::Identifier {
        wire::Identifier {
            resource_type: wire::ResourceType::Task,
            project: id.project.clone().unwrap_or_default(),
            domain: id.domain.clone().unwrap_or_default(),
            name: id.name.clone().unwrap_or_default(),
            version: id.version.clone().unwrap_or_default(),
        }
    }

    /// Serializes a possibly-partial workflow identifier; unresolved
    /// fields serialize as empty strings.
    pub fn serialize_partial_workflow_identifier(
        &self,
        id: &PartialWorkflowIdentifier,
    ) -> wire::Identifier {
        wire::Identifier {
            resource_type: wire::ResourceType::Workflow,
            project: id.project.clone().unwrap_or_default(),
            domain: id.domain.clone().unwrap_or_default(),
            name: id.name.clone().unwrap_or_default(),
            version: id.version.clone().unwrap_or_default(),
        }
    }

    /// Serializes a primitive value.
    pub fn serialize_primitive(&self, primitive: &Primitive) -> wire::Primitive {
        match primitive {
            Primitive::Integer(value) => wire::Primitive::Integer(*value),
            Primitive::Float(value) => wire::Primitive::FloatValue(*value),
            Primitive::String(value) => wire::Primitive::StringValue(value.clone()),
            Primitive::Boolean(value) => wire::Primitive::Boolean(*value),
            Primitive::Datetime(value) => wire::Primitive::Datetime(timestamp_to_wire(value)),
            Primitive::Duration(value) => wire::Primitive::Duration(duration_to_wire(value)),
        }
    }

    /// Serializes a scalar value.
    pub fn serialize_scalar(&self, scalar: &Scalar) -> wire::Scalar {
        match scalar {
            Scalar::Primitive(primitive) => {
                wire::Scalar::Primitive(self.serialize_primitive(primitive))
            }
        }
    }

    /// Serializes a literal, recursing through collections and maps.
    /// Collection element order is preserved.
    pub fn serialize_literal(&self, literal: &Literal) -> wire::Literal {
        match literal {
            Literal::Scalar(scalar) => wire::Literal::Scalar(self.serialize_scalar(scalar)),
            Literal::Collection(items) => wire::Literal::Collection(
                items.iter().map(|item| self.serialize_literal(item)).collect(),
            ),
            Literal::Map(entries) => wire::Literal::Map(
                entries
                    .iter()
                    .map(|(name, value)| (name.clone(), self.serialize_literal(value)))
                    .collect(),
            ),
        }
    }

    /// Serializes a named literal map.
    pub fn serialize_literal_map(
        &self,
        literals: &HashMap<String, Literal>,
    ) -> HashMap<String, wire::Literal> {
        literals
            .iter()
            .map(|(name, value)| (name.clone(), self.serialize_literal(value)))
            .collect()
    }

    /// Serializes an output reference; both names are copied verbatim,
    /// resolution within the template is the graph builder's contract.
    pub fn serialize_output_reference(&self, reference: &OutputReference) -> wire::OutputReference {
        wire::OutputReference {
            node_id: reference.node_id.clone(),
            var: reference.var.clone(),
        }
    }

    /// Serializes binding data, recursing through collections and maps.
    pub fn serialize_binding_data(&self, data: &BindingData) -> wire::BindingData {
        match data {
            BindingData::Scalar(scalar) => {
                wire::BindingData::Scalar(self.serialize_scalar(scalar))
            }
            BindingData::Collection(items) => wire::BindingData::Collection(
                items.iter().map(|item| self.serialize_binding_data(item)).collect(),
            ),
            BindingData::Map(entries) => wire::BindingData::Map(
                entries
                    .iter()
                    .map(|(name, value)| (name.clone(), self.serialize_binding_data(value)))
                    .collect(),
            ),
            BindingData::Promise(reference) => {
                wire::BindingData::Promise(self.serialize_output_reference(reference))
            }
        }
    }

    /// Serializes a named binding.
    pub fn serialize_binding(&self, binding: &Binding) -> wire::Binding {
        wire::Binding {
            var: binding.var.clone(),
            binding: self.serialize_binding_data(&binding.binding),
        }
    }

    /// Serializes a type descriptor, recursing through nested
    /// collection/map types.
    pub fn serialize_literal_type(&self, literal_type: &LiteralType) -> wire::LiteralType {
        match literal_type {
            LiteralType::Simple(simple) => {
                wire::LiteralType::Simple(self.serialize_simple_type(*simple))
            }
            LiteralType::Collection(element) => {
                wire::LiteralType::CollectionType(Box::new(self.serialize_literal_type(element)))
            }
            LiteralType::Map(value) => {
                wire::LiteralType::MapValueType(Box::new(self.serialize_literal_type(value)))
            }
        }
    }

    /// Serializes a simple type constant.
    pub fn serialize_simple_type(&self, simple: SimpleType) -> wire::SimpleType {
        match simple {
            SimpleType::Integer => wire::SimpleType::Integer,
            SimpleType::Float => wire::SimpleType::Float,
            SimpleType::String => wire::SimpleType::String,
            SimpleType::Boolean => wire::SimpleType::Boolean,
            SimpleType::Datetime => wire::SimpleType::Datetime,
            SimpleType::Duration => wire::SimpleType::Duration,
            SimpleType::Struct => wire::SimpleType::Struct,
        }
    }

    /// Serializes a declared variable.
    pub fn serialize_variable(&self, variable: &Variable) -> wire::Variable {
        wire::Variable {
            literal_type: self.serialize_literal_type(&variable.literal_type),
            description: variable.description.clone(),
        }
    }

    /// Serializes a typed interface. Map entry order is not significant
    /// on the wire.
    pub fn serialize_typed_interface(&self, interface: &TypedInterface) -> wire::TypedInterface {
        wire::TypedInterface {
            inputs: interface
                .inputs
                .iter()
                .map(|(name, variable)| (name.clone(), self.serialize_variable(variable)))
                .collect(),
            outputs: interface
                .outputs
                .iter()
                .map(|(name, variable)| (name.clone(), self.serialize_variable(variable)))
                .collect(),
        }
    }

    /// Serializes a container; argv and environment order are
    /// preserved.
    pub fn serialize_container(&self, container: &Container) -> wire::Container {
        wire::Container {
            image: container.image.clone(),
            command: container.command.clone(),
            args: container.args.clone(),
            env: container.env.iter().map(|pair| self.serialize_key_value_pair(pair)).collect(),
        }
    }

    /// Serializes a key/value pair.
    pub fn serialize_key_value_pair(&self, pair: &KeyValuePair) -> wire::KeyValuePair {
        wire::KeyValuePair {
            key: pair.key.clone(),
            value: pair.value.clone(),
        }
    }

    /// Serializes a task template.
    ///
    /// The runtime metadata block and the top-level task type tag come
    /// from the injected [`CodecConfig`](super::CodecConfig), uniformly
    /// for every template.
    pub fn serialize_task_template(&self, template: &TaskTemplate) -> wire::TaskTemplate {
        tracing::debug!(
            target: TRACING_TARGET,
            image = %template.container.image,
            task_type = %self.config.task_type,
            "serializing task template",
        );

        wire::TaskTemplate {
            container: self.serialize_container(&template.container),
            metadata: wire::TaskMetadata {
                runtime: wire::RuntimeMetadata {
                    runtime_type: wire::RuntimeType::FlyteSdk,
                    version: self.config.runtime_version.clone(),
                    flavor: self.config.runtime_flavor.clone(),
                },
            },
            interface: self.serialize_typed_interface(&template.interface),
            task_type: self.config.task_type.clone(),
        }
    }

    /// Serializes a graph node, preserving upstream id order and input
    /// binding order.
    pub fn serialize_node(&self, node: &Node) -> wire::Node {
        let target = match &node.kind {
            NodeKind::Task(task) => wire::NodeTarget::TaskNode(wire::TaskNode {
                reference_id: self.serialize_partial_task_identifier(&task.reference_id),
            }),
            NodeKind::Branch(branch) => {
                wire::NodeTarget::BranchNode(self.serialize_branch_node(branch))
            }
            NodeKind::Workflow(workflow) => wire::NodeTarget::WorkflowNode(wire::WorkflowNode {
                sub_workflow_ref: self
                    .serialize_partial_workflow_identifier(&workflow.sub_workflow_ref),
            }),
        };

        wire::Node {
            id: node.id.clone(),
            upstream_node_ids: node.upstream_node_ids.clone(),
            target,
            inputs: node.inputs.iter().map(|binding| self.serialize_binding(binding)).collect(),
        }
    }

    fn serialize_branch_node(&self, branch: &BranchNode) -> wire::BranchNode {
        wire::BranchNode {
            if_else: self.serialize_if_else_block(&branch.if_else),
        }
    }

    fn serialize_if_else_block(&self, block: &IfElseBlock) -> wire::IfElseBlock {
        wire::IfElseBlock {
            case: self.serialize_if_block(&block.case),
            other: block.other.iter().map(|case| self.serialize_if_block(case)).collect(),
            else_node: block
                .else_node
                .as_deref()
                .map(|node| Box::new(self.serialize_node(node))),
        }
    }

    fn serialize_if_block(&self, block: &IfBlock) -> wire::IfBlock {
        wire::IfBlock {
            condition: self.serialize_boolean_expression(&block.condition),
            then_node: Box::new(self.serialize_node(&block.then_node)),
        }
    }

    fn serialize_boolean_expression(
        &self,
        expression: &BooleanExpression,
    ) -> wire::BooleanExpression {
        match expression {
            BooleanExpression::Comparison(comparison) => {
                wire::BooleanExpression::Comparison(self.serialize_comparison(comparison))
            }
            BooleanExpression::Conjunction(conjunction) => wire::BooleanExpression::Conjunction(
                Box::new(wire::ConjunctionExpression {
                    operator: match conjunction.operator {
                        LogicalOperator::And => wire::LogicalOperator::And,
                        LogicalOperator::Or => wire::LogicalOperator::Or,
                    },
                    left_expression: self
                        .serialize_boolean_expression(&conjunction.left_expression),
                    right_expression: self
                        .serialize_boolean_expression(&conjunction.right_expression),
                }),
            ),
        }
    }

    fn serialize_comparison(&self, comparison: &ComparisonExpression) -> wire::ComparisonExpression {
        let operator = match comparison.operator {
            ComparisonOperator::Eq => wire::ComparisonOperator::Eq,
            ComparisonOperator::Neq => wire::ComparisonOperator::Neq,
            ComparisonOperator::Gt => wire::ComparisonOperator::Gt,
            ComparisonOperator::Gte => wire::ComparisonOperator::Gte,
            ComparisonOperator::Lt => wire::ComparisonOperator::Lt,
            ComparisonOperator::Lte => wire::ComparisonOperator::Lte,
        };

        wire::ComparisonExpression {
            operator,
            left_value: self.serialize_operand(&comparison.left_value),
            right_value: self.serialize_operand(&comparison.right_value),
        }
    }

    fn serialize_operand(&self, operand: &Operand) -> wire::Operand {
        match operand {
            Operand::Primitive(primitive) => {
                wire::Operand::Primitive(self.serialize_primitive(primitive))
            }
            Operand::Var(name) => wire::Operand::Var(name.clone()),
        }
    }

    /// Serializes workflow metadata.
    pub fn serialize_workflow_metadata(&self, metadata: &WorkflowMetadata) -> wire::WorkflowMetadata {
        wire::WorkflowMetadata {
            on_failure: match metadata.on_failure {
                flyte_api::workflow::OnFailurePolicy::FailImmediately => {
                    wire::OnFailurePolicy::FailImmediately
                }
                flyte_api::workflow::OnFailurePolicy::FailAfterExecutableNodesComplete => {
                    wire::OnFailurePolicy::FailAfterExecutableNodesComplete
                }
            },
        }
    }

    /// Serializes a workflow template.
    ///
    /// A pure structural transform: nodes map in declaration order, no
    /// cycle or reference-resolution checks are performed.
    pub fn serialize_workflow_template(&self, template: &WorkflowTemplate) -> wire::WorkflowTemplate {
        tracing::debug!(
            target: TRACING_TARGET,
            nodes = template.nodes.len(),
            outputs = template.outputs.len(),
            "serializing workflow template",
        );

        wire::WorkflowTemplate {
            metadata: self.serialize_workflow_metadata(&template.metadata),
            interface: self.serialize_typed_interface(&template.interface),
            nodes: template.nodes.iter().map(|node| self.serialize_node(node)).collect(),
            outputs: template.outputs.iter().map(|binding| self.serialize_binding(binding)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use flyte_api::identifier::{
        LaunchPlanIdentifier, TaskIdentifier, WorkflowIdentifier,
    };
    use flyte_api::workflow::TaskNode;

    use super::*;
    use crate::codec::CodecConfig;

    const PROJECT: &str = "flyte-test";
    const DOMAIN: &str = "development";
    const VERSION: &str = "1";

    fn task_node(id: &str) -> Node {
        let reference_id = PartialTaskIdentifier::builder()
            .with_project(PROJECT)
            .with_domain(DOMAIN)
            .with_name(format!("task-{id}"))
            .with_version(format!("version-{id}"))
            .build()
            .unwrap();

        Node::builder()
            .with_id(id)
            .with_kind(NodeKind::Task(TaskNode { reference_id }))
            .with_inputs(vec![
                Binding::builder()
                    .with_var(format!("input-name-{id}"))
                    .with_binding(BindingData::of_primitive(format!("input-scalar-{id}")))
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn test_serialize_identifiers_dispatch_on_variant() {
        let codec = Codec::default();
        let task: Identifier = TaskIdentifier::builder()
            .with_project(PROJECT)
            .with_domain(DOMAIN)
            .with_name("name")
            .with_version(VERSION)
            .build()
            .unwrap()
            .into();
        let workflow: Identifier = WorkflowIdentifier::builder()
            .with_project(PROJECT)
            .with_domain(DOMAIN)
            .with_name("name")
            .with_version(VERSION)
            .build()
            .unwrap()
            .into();
        let launch_plan: Identifier = LaunchPlanIdentifier::builder()
            .with_project(PROJECT)
            .with_domain(DOMAIN)
            .with_name("name")
            .with_version(VERSION)
            .build()
            .unwrap()
            .into();

        let serialized: Vec<_> = [task, workflow, launch_plan]
            .iter()
            .map(|id| codec.serialize_identifier(id))
            .collect();

        assert_eq!(serialized[0].resource_type, wire::ResourceType::Task);
        assert_eq!(serialized[1].resource_type, wire::ResourceType::Workflow);
        assert_eq!(serialized[2].resource_type, wire::ResourceType::LaunchPlan);
        // Identical apart from the resource type tag.
        for id in &serialized {
            assert_eq!(id.project, PROJECT);
            assert_eq!(id.domain, DOMAIN);
            assert_eq!(id.name, "name");
            assert_eq!(id.version, VERSION);
        }
    }

    #[test]
    fn test_serialize_resource_type_wire_tags() {
        assert_eq!(
            serde_json::to_value(wire::ResourceType::LaunchPlan).unwrap(),
            serde_json::json!("LAUNCH_PLAN")
        );
    }

    #[test]
    fn test_serialize_partial_task_identifier_defaults_empty() {
        let codec = Codec::default();
        let partial = PartialTaskIdentifier::builder().with_name("task-a").build().unwrap();

        let serialized = codec.serialize_partial_task_identifier(&partial);

        assert_eq!(serialized.resource_type, wire::ResourceType::Task);
        assert_eq!(serialized.name, "task-a");
        assert_eq!(serialized.project, "");
        assert_eq!(serialized.domain, "");
        assert_eq!(serialized.version, "");
    }

    #[test]
    fn test_serialize_literal_map() {
        let codec = Codec::default();
        let input = HashMap::from([("a".to_string(), Literal::of_primitive(1337i64))]);

        let output = codec.serialize_literal_map(&input);

        let expected = HashMap::from([(
            "a".to_string(),
            wire::Literal::Scalar(wire::Scalar::Primitive(wire::Primitive::Integer(1337))),
        )]);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_serialize_literal_collection_preserves_order() {
        let codec = Codec::default();
        let input = Literal::Collection(vec![
            Literal::of_primitive(1i64),
            Literal::of_primitive(2i64),
            Literal::of_primitive(3i64),
        ]);

        let output = codec.serialize_literal(&input);

        match output {
            wire::Literal::Collection(items) => {
                let values: Vec<_> = items
                    .iter()
                    .map(|item| match item {
                        wire::Literal::Scalar(wire::Scalar::Primitive(
                            wire::Primitive::Integer(value),
                        )) => *value,
                        other => panic!("unexpected element: {other:?}"),
                    })
                    .collect();
                assert_eq!(values, vec![1, 2, 3]);
            }
            other => panic!("expected collection, got {other:?}"),
        }
    }

    #[test]
    fn test_serialize_output_reference_passthrough() {
        let codec = Codec::default();
        let input = OutputReference::builder()
            .with_node_id("node-id")
            .with_var("var")
            .build()
            .unwrap();

        let output = codec.serialize_output_reference(&input);

        assert_eq!(output.node_id, "node-id");
        assert_eq!(output.var, "var");
    }

    #[test]
    fn test_serialize_binding_data_scalar() {
        let codec = Codec::default();
        let input = BindingData::of_primitive(1337i64);

        let output = codec.serialize_binding_data(&input);

        assert_eq!(
            output,
            wire::BindingData::Scalar(wire::Scalar::Primitive(wire::Primitive::Integer(1337)))
        );
    }

    #[test]
    fn test_serialize_task_template_fixed_metadata() {
        let codec = Codec::default();
        let template = TaskTemplate::builder()
            .with_container(
                Container::builder()
                    .with_image("alpine:3.7")
                    .with_command(vec!["echo".to_string()])
                    .with_args(vec!["hello world".to_string()])
                    .with_env(vec![KeyValuePair::of("key", "value")])
                    .build()
                    .unwrap(),
            )
            .with_interface(
                TypedInterface::builder()
                    .with_inputs(HashMap::from([(
                        "x".to_string(),
                        Variable::of_type(SimpleType::String),
                    )]))
                    .with_outputs(HashMap::from([(
                        "y".to_string(),
                        Variable::of_type(SimpleType::Integer),
                    )]))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let serialized = codec.serialize_task_template(&template);

        assert_eq!(serialized.metadata.runtime.runtime_type, wire::RuntimeType::FlyteSdk);
        assert_eq!(serialized.metadata.runtime.flavor, super::super::RUNTIME_FLAVOR);
        assert_eq!(serialized.metadata.runtime.version, super::super::RUNTIME_VERSION);
        assert_eq!(serialized.task_type, super::super::TASK_TYPE);
        assert_eq!(serialized.container.image, "alpine:3.7");
        assert_eq!(
            serialized.interface.inputs["x"].literal_type,
            wire::LiteralType::Simple(wire::SimpleType::String)
        );
        assert_eq!(
            serialized.interface.outputs["y"].literal_type,
            wire::LiteralType::Simple(wire::SimpleType::Integer)
        );
    }

    #[test]
    fn test_serialize_task_template_substituted_config() {
        let codec = Codec::new(CodecConfig {
            runtime_flavor: "test-flavor".to_string(),
            runtime_version: "9.9.9".to_string(),
            task_type: "test-task".to_string(),
        });
        let template = TaskTemplate::builder()
            .with_container(Container::builder().with_image("alpine:3.7").build().unwrap())
            .with_interface(TypedInterface::default())
            .build()
            .unwrap();

        let serialized = codec.serialize_task_template(&template);

        assert_eq!(serialized.metadata.runtime.flavor, "test-flavor");
        assert_eq!(serialized.metadata.runtime.version, "9.9.9");
        assert_eq!(serialized.task_type, "test-task");
    }

    #[test]
    fn test_serialize_workflow_template_preserves_node_order() {
        let codec = Codec::default();
        let mut node_a = task_node("a");
        node_a.upstream_node_ids = vec!["b".to_string()];
        let node_b = task_node("b");
        let template = WorkflowTemplate::builder()
            .with_nodes(vec![node_a, node_b])
            .with_interface(TypedInterface::default())
            .build()
            .unwrap();

        let serialized = codec.serialize_workflow_template(&template);

        assert_eq!(serialized.nodes.len(), 2);
        assert_eq!(serialized.nodes[0].id, "a");
        assert_eq!(serialized.nodes[0].upstream_node_ids, vec!["b"]);
        assert_eq!(serialized.nodes[1].id, "b");
        assert!(serialized.nodes[1].upstream_node_ids.is_empty());

        match &serialized.nodes[0].target {
            wire::NodeTarget::TaskNode(task) => {
                assert_eq!(task.reference_id.resource_type, wire::ResourceType::Task);
                assert_eq!(task.reference_id.name, "task-a");
                assert_eq!(task.reference_id.version, "version-a");
            }
            other => panic!("expected task node, got {other:?}"),
        }
        assert_eq!(serialized.nodes[0].inputs[0].var, "input-name-a");
    }

    #[test]
    fn test_serialize_workflow_outputs_as_bindings() {
        let codec = Codec::default();
        let template = WorkflowTemplate::builder()
            .with_nodes(vec![task_node("a")])
            .with_interface(TypedInterface::default())
            .with_outputs(vec![
                Binding::builder()
                    .with_var("result")
                    .with_binding(BindingData::Promise(
                        OutputReference::builder()
                            .with_node_id("a")
                            .with_var("out")
                            .build()
                            .unwrap(),
                    ))
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap();

        let serialized = codec.serialize_workflow_template(&template);

        assert_eq!(serialized.outputs.len(), 1);
        assert_eq!(serialized.outputs[0].var, "result");
        match &serialized.outputs[0].binding {
            wire::BindingData::Promise(reference) => {
                assert_eq!(reference.node_id, "a");
                assert_eq!(reference.var, "out");
            }
            other => panic!("expected promise, got {other:?}"),
        }
    }

    #[test]
    fn test_serialize_branch_node() {
        let codec = Codec::default();
        let branch = NodeKind::Branch(BranchNode {
            if_else: IfElseBlock::builder()
                .with_case(IfBlock {
                    condition: BooleanExpression::Comparison(ComparisonExpression {
                        operator: ComparisonOperator::Gt,
                        left_value: Operand::Var("x".to_string()),
                        right_value: Operand::Primitive(Primitive::Integer(0)),
                    }),
                    then_node: Box::new(task_node("then")),
                })
                .with_else_node(task_node("else"))
                .build()
                .unwrap(),
        });
        let node = Node::builder().with_id("branch").with_kind(branch).build().unwrap();

        let serialized = codec.serialize_node(&node);

        match serialized.target {
            wire::NodeTarget::BranchNode(branch) => {
                assert_eq!(
                    branch.if_else.case.then_node.id, "then",
                );
                match branch.if_else.case.condition {
                    wire::BooleanExpression::Comparison(comparison) => {
                        assert_eq!(comparison.operator, wire::ComparisonOperator::Gt);
                        assert_eq!(comparison.left_value, wire::Operand::Var("x".to_string()));
                    }
                    other => panic!("expected comparison, got {other:?}"),
                }
                assert_eq!(branch.if_else.else_node.unwrap().id, "else");
            }
            other => panic!("expected branch node, got {other:?}"),
        }
    }

    #[test]
    fn test_serialized_node_json_shape() {
        let codec = Codec::default();
        let mut node = task_node("a");
        node.upstream_node_ids = vec!["b".to_string()];

        let value = serde_json::to_value(codec.serialize_node(&node)).unwrap();

        assert_eq!(value["id"], "a");
        assert_eq!(value["upstreamNodeIds"], serde_json::json!(["b"]));
        assert_eq!(value["taskNode"]["referenceId"]["resourceType"], "TASK");
        assert_eq!(
            value["inputs"][0]["binding"]["scalar"]["primitive"]["stringValue"],
            "input-scalar-a"
        );
    }

    #[test]
    fn test_serialized_primitive_json_shape() {
        let codec = Codec::default();
        let datetime = codec.serialize_primitive(&Primitive::Datetime(
            Timestamp::new(1_600_000_000, 123_456_789).unwrap(),
        ));

        let value = serde_json::to_value(datetime).unwrap();
        assert_eq!(value["datetime"]["seconds"], 1_600_000_000i64);
        assert_eq!(value["datetime"]["nanos"], 123_456_789);
    }

    #[test]
    fn test_pre_epoch_timestamp_uses_forward_nanos() {
        let codec = Codec::default();
        // Half a second before the epoch.
        let instant = Timestamp::new(-1, 500_000_000).unwrap();

        let serialized = codec.serialize_primitive(&Primitive::Datetime(instant));

        match serialized {
            wire::Primitive::Datetime(timestamp) => {
                assert_eq!(timestamp.seconds, -1);
                assert_eq!(timestamp.nanos, 500_000_000);
            }
            other => panic!("expected datetime, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_duration_keeps_sign() {
        let codec = Codec::default();
        let duration = SignedDuration::new(-3, -500_000_000);

        let serialized = codec.serialize_primitive(&Primitive::Duration(duration));

        match serialized {
            wire::Primitive::Duration(wire_duration) => {
                assert_eq!(wire_duration.seconds, -3);
                assert_eq!(wire_duration.nanos, -500_000_000);
            }
            other => panic!("expected duration, got {other:?}"),
        }
    }
}
