//! Bookmarklet generator for LinkKeeper.
//!
//! Produces the `javascript:` one-liner users drag into their bookmarks bar.
//! The script reads the current page's URL, title, and description (falling
//! back from the `description` meta tag to `og:description`), then opens the
//! add-bookmark page with those values pre-filled as query parameters.
//!
//! This is static templating over a target URL, not logic: the generated
//! string is code-as-data handed to the browser.

/// Suggested display label for the draggable bookmarklet link.
pub const BOOKMARKLET_LABEL: &str = "Save to LinkKeeper";

/// Builds the bookmarklet script for the given app base URL (no trailing slash).
pub fn bookmarklet_code(app_url: &str) -> String {
    let app_url = app_url.trim_end_matches('/');
    format!(
        "javascript:(function(){{\
         var url=window.location.href;\
         var title=document.title;\
         var description='';\
         var metaDesc=document.querySelector('meta[name=\"description\"]');\
         if(metaDesc){{description=metaDesc.getAttribute('content')||'';}}\
         if(!description){{\
         var ogDesc=document.querySelector('meta[property=\"og:description\"]');\
         if(ogDesc){{description=ogDesc.getAttribute('content')||'';}}\
         }}\
         var params=new URLSearchParams({{url:url,title:title,description:description}});\
         window.open('{}/add-bookmark?'+params.toString(),'_blank','width=800,height=600');\
         }})();",
        app_url
    )
}
