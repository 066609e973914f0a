//! JNI entry point for `public native int[] sortTest(int[] arr)` on class `TestSort`.
//!
//! Load with `System.loadLibrary("jni_sort")`.

use std::panic::{self, AssertUnwindSafe};

use jni::objects::{AutoElements, JIntArray, JObject, ReleaseMode};
use jni::sys::jint;
use jni::JNIEnv;
use tracing::warn;

use crate::array::IntArrayHandle;
use crate::error::SortError;
use crate::sorter::sort_array;

/// A JVM `int[]` local reference together with the env it belongs to.
pub struct JniIntArray<'env, 'local> {
    env: &'env mut JNIEnv<'local>,
    array: JIntArray<'local>,
}

impl<'env, 'local> JniIntArray<'env, 'local> {
    pub fn new(env: &'env mut JNIEnv<'local>, array: JIntArray<'local>) -> Self {
        Self { env, array }
    }

    pub fn into_inner(self) -> JIntArray<'local> {
        self.array
    }

    fn non_null(&self) -> Result<(), SortError> {
        if self.array.is_null() {
            return Err(SortError::invalid_argument("null int[] reference"));
        }

        Ok(())
    }
}

impl<'env, 'local> IntArrayHandle for JniIntArray<'env, 'local> {
    type Elements<'a> = AutoElements<'local, 'local, 'a, jint>
    where
        Self: 'a;

    fn length(&mut self) -> Result<usize, SortError> {
        self.non_null()?;

        let len = self.env.get_array_length(&self.array)?;
        usize::try_from(len)
            .map_err(|_| SortError::invalid_argument(format!("negative array length {len}")))
    }

    fn elements_mut(&mut self) -> Result<Self::Elements<'_>, SortError> {
        self.non_null()?;

        // SAFETY: the returned guard is the only view of this array we create, and no other JNI
        // call touches the array until it is dropped. CopyBack commits and frees the buffer on
        // drop.
        let elements = unsafe {
            self.env
                .get_array_elements(&self.array, ReleaseMode::CopyBack)?
        };

        Ok(elements)
    }
}

/// `int[] TestSort.sortTest(int[] arr)`
///
/// Returns `arr` sorted ascending. A null `arr` throws `IllegalArgumentException` and returns
/// null.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_TestSort_sortTest<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    array: JIntArray<'local>,
) -> JIntArray<'local> {
    // Unwinding into the JVM is undefined behavior.
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        sort_array(JniIntArray::new(&mut env, array)).map(JniIntArray::into_inner)
    }));

    match result {
        Ok(Ok(sorted)) => sorted,
        Ok(Err(err)) => {
            warn!(%err, "sortTest rejected its argument");
            throw_unless_pending(
                &mut env,
                "java/lang/IllegalArgumentException",
                &err.to_string(),
            );
            JObject::null().into()
        }
        Err(_) => {
            warn!("panic in sortTest");
            throw_unless_pending(&mut env, "java/lang/Error", "panic in native sort");
            JObject::null().into()
        }
    }
}

fn throw_unless_pending(env: &mut JNIEnv, class: &str, msg: &str) {
    // A failed JNI call may already have raised e.g. OutOfMemoryError, keep that one.
    if env.exception_check().unwrap_or(true) {
        return;
    }

    if let Err(err) = env.throw_new(class, msg) {
        warn!(%err, class, "could not throw");
    }
}
