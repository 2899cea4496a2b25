//! Whole-pipeline conversion of realistic class components.

use vc2c_common::{ConvertOptions, ImportDecl};
use vc2c_ir::{IRNode, IRParam, IRPrinter, IRProperty, TypeNode};
use vc2c_transform::{
    ClassMember, ConvertError, Decorator, DeclaredTypeOracle, ReferenceKind, TableTypeOracle, Tag,
    convert_members,
};

fn call_this(name: &str, arguments: Vec<IRNode>) -> IRNode {
    IRNode::expr_stmt(IRNode::call(IRNode::this_prop(name), arguments))
}

fn counter_component() -> Vec<ClassMember> {
    vec![
        ClassMember::property("msg", Some(TypeNode::String))
            .optional()
            .with_decorator(Decorator::new(
                "Prop",
                vec![IRNode::object(vec![
                    IRProperty::init("type", IRNode::id("String")),
                    IRProperty::init("default", IRNode::string("Hello")),
                ])],
            )),
        ClassMember::property("localValue", Some(TypeNode::String))
            .with_decorator(Decorator::new("PropSync", vec![IRNode::string("value")])),
        ClassMember::property("count", None).with_initializer(IRNode::number("0")),
        ClassMember::property("input", Some(TypeNode::reference("HTMLInputElement")))
            .with_decorator(Decorator::bare("Ref")),
        ClassMember::getter(
            "double",
            Some(TypeNode::Number),
            vec![IRNode::ret(Some(IRNode::binary(
                IRNode::this_prop("count"),
                "*",
                IRNode::number("2"),
            )))],
        ),
        ClassMember::method(
            "onCountChanged",
            vec![IRParam::new("v")],
            None,
            vec![call_this("$emit", vec![IRNode::string("changed"), IRNode::id("v")])],
        )
        .with_decorator(Decorator::new("Watch", vec![IRNode::string("count")])),
        ClassMember::method(
            "mounted",
            vec![],
            None,
            vec![
                IRNode::expr_stmt(IRNode::call(
                    IRNode::prop(IRNode::this_prop("input"), "focus"),
                    vec![],
                )),
                call_this("reset", vec![]),
            ],
        ),
        ClassMember::method(
            "reset",
            vec![],
            None,
            vec![
                IRNode::expr_stmt(IRNode::assign(IRNode::this_prop("count"), IRNode::number("0"))),
                IRNode::expr_stmt(IRNode::assign(
                    IRNode::this_prop("localValue"),
                    IRNode::this_prop("msg"),
                )),
            ],
        ),
        ClassMember::method(
            "created",
            vec![],
            None,
            vec![IRNode::expr_stmt(IRNode::assign(
                IRNode::this_prop("count"),
                IRNode::number("1"),
            ))],
        ),
        ClassMember::property("later", Some(TypeNode::String)),
    ]
}

fn counter_oracle() -> TableTypeOracle {
    TableTypeOracle::new().with_identifier("v", TypeNode::Number)
}

#[test]
fn test_counter_component_statements() {
    let output = convert_members(&counter_component(), &ConvertOptions::default(), &counter_oracle())
        .expect("component converts");

    let expected = concat!(
        "interface Props {\n  value: string;\n  msg?: string;\n}\n",
        "const props = withDefaults(defineProps<Props>(), { msg: 'Hello' });\n",
        "const localValue = computed<string>({\n  get: () => {\n    return props.value;\n  },\n  set: (value) => {\n    emit('update:value', value);\n  }\n});\n",
        "const count = ref(0);\n",
        "const input = ref<HTMLInputElement>();\n",
        "const double = computed<number>(() => {\n  return count.value * 2;\n});\n",
        "watch(() => count.value, (v) => {\n  emit('changed', v);\n});\n",
        "function reset() {\n  count.value = 0;\n  localValue.value = props.msg;\n}\n",
        "function created() {\n  count.value = 1;\n}\n",
        "created();\n",
        "onMounted(() => {\n  input.value!.focus();\n  reset();\n});\n",
        "const emit = defineEmits<{ (e: 'update:value', data: string): void; (e: 'changed', data: number): void; }>();\n",
    );
    assert_eq!(IRPrinter::emit_statements(&output.statements), expected);
}

#[test]
fn test_counter_component_metadata() {
    let output = convert_members(&counter_component(), &ConvertOptions::default(), &counter_oracle())
        .expect("component converts");

    assert_eq!(output.skipped, vec!["later".to_string()]);
    assert_eq!(
        output.imports,
        vec![ImportDecl {
            module: "vue".to_string(),
            named: vec![
                "computed".to_string(),
                "ref".to_string(),
                "watch".to_string(),
                "onMounted".to_string(),
            ],
        }]
    );

    let tags: Vec<Tag> = output.results.iter().map(|result| result.tag).collect();
    assert_eq!(
        tags,
        vec![
            Tag::Props,
            Tag::Computed,
            Tag::Data,
            Tag::TemplateRef,
            Tag::Computed,
            Tag::Watch,
            Tag::Method,
            Tag::LifecycleHook,
            Tag::LifecycleHook,
            Tag::Emit,
        ]
    );
    assert!(output.results.iter().all(|result| result.tag != Tag::PropSync));

    let local_value = output
        .results
        .iter()
        .find(|result| result.declares("localValue") && result.tag == Tag::Computed)
        .expect("merged sync accessor");
    assert_eq!(local_value.reference, ReferenceKind::VariableValue);
}

#[test]
fn test_compatible_mode_imports() {
    let options = ConvertOptions {
        compatible: true,
        ..ConvertOptions::default()
    };
    let output = convert_members(&counter_component(), &options, &counter_oracle()).expect("converts");
    assert_eq!(output.imports.len(), 1);
    assert_eq!(output.imports[0].module, "@vue/composition-api");
}

#[test]
fn test_sync_decorator_on_method_aborts_run() {
    let members = vec![
        ClassMember::property("count", None).with_initializer(IRNode::number("0")),
        ClassMember::method("sync", vec![], None, vec![])
            .with_decorator(Decorator::new("PropSync", vec![IRNode::string("value")])),
    ];

    let err = convert_members(&members, &ConvertOptions::default(), &DeclaredTypeOracle)
        .expect_err("invalid member");
    assert!(matches!(err, ConvertError::SyncOnNonProperty { ref member, .. } if member == "sync"));
}

#[test]
fn test_empty_class() {
    let output = convert_members(&[], &ConvertOptions::default(), &DeclaredTypeOracle).expect("converts");
    assert!(output.statements.is_empty());
    assert!(output.imports.is_empty());
    assert!(output.results.is_empty());
}

#[test]
fn test_forward_reference_cycle_is_kept_in_order() {
    let members = vec![
        ClassMember::method("ping", vec![], None, vec![call_this("pong", vec![])]),
        ClassMember::method("pong", vec![], None, vec![call_this("ping", vec![])]),
        ClassMember::property("ready", None).with_initializer(IRNode::BooleanLiteral(false)),
    ];
    let output = convert_members(&members, &ConvertOptions::default(), &DeclaredTypeOracle).expect("converts");

    assert_eq!(
        IRPrinter::emit_statements(&output.statements),
        "const ready = ref(false);\nfunction ping() {\n  pong();\n}\nfunction pong() {\n  ping();\n}\n"
    );
}

#[test]
fn test_single_prop_yields_props_declaration_only() {
    let members = vec![ClassMember::property("title", Some(TypeNode::String))
        .with_decorator(Decorator::new("Prop", vec![IRNode::id("String")]))];
    let output = convert_members(&members, &ConvertOptions::default(), &DeclaredTypeOracle).expect("converts");

    assert_eq!(
        IRPrinter::emit_statements(&output.statements),
        "interface Props {\n  title: string;\n}\nconst props = defineProps<Props>();\n"
    );
}

#[test]
fn test_sync_event_keeps_member_type_over_getter_emit() {
    let members = vec![
        ClassMember::property("localValue", Some(TypeNode::String))
            .with_decorator(Decorator::new("PropSync", vec![IRNode::string("value")])),
        ClassMember::getter(
            "bumped",
            Some(TypeNode::Number),
            vec![
                call_this("$emit", vec![IRNode::string("update:value"), IRNode::number("1")]),
                IRNode::ret(Some(IRNode::number("1"))),
            ],
        ),
    ];
    let output = convert_members(&members, &ConvertOptions::default(), &DeclaredTypeOracle).expect("converts");

    let emit = output.statements.last().expect("emit declaration");
    assert_eq!(
        IRPrinter::emit_to_string(emit),
        "const emit = defineEmits<{ (e: 'update:value', data: string): void; }>();"
    );
}

#[test]
fn test_sync_event_payload_is_not_widened() {
    let members = vec![ClassMember::property("mode", Some(TypeNode::string_literal("edit")))
        .with_decorator(Decorator::new("PropSync", vec![IRNode::string("kind")]))];
    let output = convert_members(&members, &ConvertOptions::default(), &DeclaredTypeOracle).expect("converts");

    let emit = output.statements.last().expect("emit declaration");
    assert_eq!(
        IRPrinter::emit_to_string(emit),
        "const emit = defineEmits<{ (e: 'update:kind', data: 'edit'): void; }>();"
    );
}

#[test]
fn test_self_recursive_method_is_placed_after_ready_fragments() {
    let members = vec![
        ClassMember::method("tick", vec![], None, vec![call_this("tick", vec![])]),
        ClassMember::property("ready", None).with_initializer(IRNode::BooleanLiteral(false)),
    ];
    let output = convert_members(&members, &ConvertOptions::default(), &DeclaredTypeOracle).expect("converts");

    assert_eq!(
        IRPrinter::emit_statements(&output.statements),
        "const ready = ref(false);\nfunction tick() {\n  tick();\n}\n"
    );
}
