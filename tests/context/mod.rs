use std::sync::Arc;
use std::thread;

use valid_rail::rules::required;
use valid_rail::validation::field;
use valid_rail::{valid_struct, Context};

#[derive(Debug, PartialEq)]
struct Tenant(&'static str);

#[derive(Debug, PartialEq)]
struct Locale(&'static str);

#[test]
fn empty_context_has_no_values() {
    let ctx = Context::background();
    assert_eq!(ctx.depth(), 0);
    assert!(!ctx.contains::<Tenant>());
    assert_eq!(format!("{ctx:?}"), "[]");
}

#[test]
fn values_are_looked_up_by_type() {
    let ctx = Context::new().with_value(Tenant("acme")).with_value(Locale("de"));
    assert_eq!(ctx.value::<Tenant>(), Some(&Tenant("acme")));
    assert_eq!(ctx.value::<Locale>(), Some(&Locale("de")));
    assert!(ctx.value::<u8>().is_none());
}

#[test]
fn child_contexts_leave_parents_untouched() {
    let parent = Context::new().with_value(Tenant("acme"));
    let child = parent.with_value(Tenant("globex"));

    assert_eq!(parent.value::<Tenant>(), Some(&Tenant("acme")));
    assert_eq!(child.value::<Tenant>(), Some(&Tenant("globex")));
    assert_eq!(child.depth(), 2);
}

#[test]
fn context_is_shared_across_threads() {
    let ctx = Arc::new(Context::new().with_value(Tenant("acme")));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || {
                let name = if i % 2 == 0 { "" } else { "Ada" };
                let result = valid_struct!(&ctx, field("Name", name, &[&required()]));
                (ctx.value::<Tenant>().is_some(), result.is_err())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (saw_tenant, failed) = handle.join().unwrap();
        assert!(saw_tenant);
        assert_eq!(failed, i % 2 == 0);
    }
}
